//! Money input type for API boundary enforcement

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Format-validated monetary amount
///
/// Validates at the Serde layer, before any business logic runs:
/// - Only JSON strings are accepted (numbers bypass format control)
/// - Rejects `.5` (must be `0.5`) and `5.` (must be `5.0` or `5`)
/// - Rejects negative values, `+` prefixes, scientific notation
/// - Rejects more than two fractional digits — balances are fixed at
///   scale 2 throughout the system
///
/// Positivity (`> 0`) is a business rule and is checked by the caller;
/// zero is a valid `Amount` (e.g. an opening balance).
#[derive(Debug, Clone, Copy)]
pub struct Amount(Decimal);

impl Amount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    /// Create from Decimal (for testing)
    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl std::ops::Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("Amount cannot be empty"));
        }

        // Reject .5 format (must be 0.5)
        if s.starts_with('.') {
            return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
        }

        // Reject 5. format (must be 5.0 or 5)
        if s.ends_with('.') {
            return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
        }

        // Reject scientific notation (1.5e8, 1E10, etc.)
        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "Invalid format: scientific notation not allowed",
            ));
        }

        // Reject + prefix (should be implicit)
        if s.starts_with('+') {
            return Err(D::Error::custom("Invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

        if d.is_sign_negative() {
            return Err(D::Error::custom("Amount cannot be negative"));
        }

        if d.scale() > 2 {
            return Err(D::Error::custom(
                "Amount must have at most two decimal places",
            ));
        }

        Ok(Amount(d))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_valid_string() {
        let json = r#""30.00""#;
        let a: Amount = serde_json::from_str(json).unwrap();
        assert_eq!(*a, Decimal::from_str("30.00").unwrap());
    }

    #[test]
    fn test_amount_accepts_whole_numbers() {
        let a: Amount = serde_json::from_str(r#""30""#).unwrap();
        assert_eq!(*a, Decimal::from_str("30").unwrap());
    }

    #[test]
    fn test_amount_rejects_json_number() {
        let result: Result<Amount, _> = serde_json::from_str("30.5");
        assert!(result.is_err());
    }

    #[test]
    fn test_amount_rejects_dot_prefix() {
        let result: Result<Amount, _> = serde_json::from_str(r#"".5""#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("use 0.5 not .5"));
    }

    #[test]
    fn test_amount_rejects_dot_suffix() {
        let result: Result<Amount, _> = serde_json::from_str(r#""5.""#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("use 5.0 not 5."));
    }

    #[test]
    fn test_amount_rejects_negative() {
        let result: Result<Amount, _> = serde_json::from_str(r#""-1.50""#);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("cannot be negative")
        );
    }

    #[test]
    fn test_amount_rejects_scientific_notation() {
        let result: Result<Amount, _> = serde_json::from_str(r#""1.5e2""#);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("scientific notation")
        );
    }

    #[test]
    fn test_amount_rejects_three_decimal_places() {
        let result: Result<Amount, _> = serde_json::from_str(r#""10.005""#);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("two decimal places")
        );
    }

    #[test]
    fn test_amount_accepts_zero() {
        let a: Amount = serde_json::from_str(r#""0""#).unwrap();
        assert!(a.inner().is_zero());
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let a = Amount::from_decimal(Decimal::from_str("123.45").unwrap());
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#""123.45""#);
    }
}

//! Data models for account management

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Opaque account identifier
pub type AccountId = Uuid;

/// Account row snapshot
///
/// A plain value fetched fresh inside each transaction. The store owns
/// identity; nothing here tracks dirtiness or lives beyond one unit of work.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub account_id: AccountId,
    pub username: String,
    pub birthdate: NaiveDate,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Outward-facing account shape; the password hash never leaves the store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct AccountSummary {
    #[serde(rename = "id")]
    #[schema(value_type = String, format = Uuid)]
    pub account_id: AccountId,
    #[schema(example = "alice")]
    pub username: String,
    pub birthdate: NaiveDate,
    /// Serialized as a string to preserve the two-decimal representation
    #[schema(value_type = String, example = "100.00")]
    pub balance: Decimal,
}

/// Credential lookup row for signin
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthRecord {
    pub account_id: AccountId,
    pub username: String,
    pub password_hash: String,
}

/// Re-normalize a monetary value to exactly two decimal places.
///
/// Round-half-even, so repeated transfer-and-reverse cycles cannot
/// accumulate drift.
pub fn normalize_balance(amount: Decimal) -> Decimal {
    let mut normalized = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    normalized.rescale(2);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_pads_to_two_places() {
        assert_eq!(normalize_balance(dec("30")).to_string(), "30.00");
        assert_eq!(normalize_balance(dec("0.5")).to_string(), "0.50");
    }

    #[test]
    fn test_normalize_rounds_half_even() {
        assert_eq!(normalize_balance(dec("1.005")).to_string(), "1.00");
        assert_eq!(normalize_balance(dec("1.015")).to_string(), "1.02");
        assert_eq!(normalize_balance(dec("1.025")).to_string(), "1.02");
    }

    #[test]
    fn test_two_decimal_arithmetic_is_exact() {
        let result = normalize_balance(dec("100.00") - dec("30.00"));
        assert_eq!(result.to_string(), "70.00");

        // transfer-and-reverse must restore the original exactly
        let forward = normalize_balance(dec("100.00") - dec("33.33"));
        let back = normalize_balance(forward + dec("33.33"));
        assert_eq!(back.to_string(), "100.00");
    }

    #[test]
    fn test_summary_serializes_balance_as_string() {
        let summary = AccountSummary {
            account_id: Uuid::nil(),
            username: "alice".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            balance: normalize_balance(dec("70")),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""balance":"70.00""#));
        assert!(json.contains(r#""birthdate":"1990-04-12""#));
        assert!(!json.contains("password"));
    }
}

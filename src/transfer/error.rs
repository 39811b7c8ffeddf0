use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("source and destination accounts are the same")]
    SameAccount,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("account not found")]
    AccountNotFound,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl TransferError {
    /// True only for store failures the database marks as transient
    /// (serialization conflict, deadlock). Business rejections never
    /// change outcome on retry, so they are always final.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransferError::Store(sqlx::Error::Database(db_err)) => {
                matches!(db_err.code().as_deref(), Some("40001") | Some("40P01"))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_rejections_are_final() {
        assert!(!TransferError::SameAccount.is_retryable());
        assert!(!TransferError::InvalidAmount.is_retryable());
        assert!(!TransferError::AccountNotFound.is_retryable());
        assert!(!TransferError::InsufficientFunds.is_retryable());
    }

    #[test]
    fn test_non_database_store_errors_are_final() {
        let err = TransferError::Store(sqlx::Error::PoolTimedOut);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_messages_are_distinguishable() {
        assert_eq!(
            TransferError::SameAccount.to_string(),
            "source and destination accounts are the same"
        );
        assert_eq!(
            TransferError::InsufficientFunds.to_string(),
            "insufficient funds"
        );
    }
}

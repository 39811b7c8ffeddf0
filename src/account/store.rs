//! PostgreSQL account store
//!
//! All SQL for the `accounts` table lives here. Transfer-scoped reads and
//! writes take a caller-managed transaction handle; dropping the handle
//! without committing rolls everything back.

use super::models::{Account, AccountId, AccountSummary, AuthRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    account_id    UUID PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    birthdate     DATE NOT NULL,
    balance       NUMERIC(12, 2) NOT NULL DEFAULT 0 CHECK (balance >= 0),
    created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Account store over a PostgreSQL connection pool
#[derive(Clone)]
pub struct AccountStore {
    pool: PgPool,
}

impl AccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Idempotent schema bootstrap, used at startup and by the
    /// integration tests.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::info!("accounts schema ready");
        Ok(())
    }

    /// Open a transaction; every read and write of one transfer goes
    /// through the returned handle.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Fetch an account inside the transaction, taking a row lock held
    /// until commit or rollback.
    pub async fn get_for_update(
        tx: &mut Transaction<'static, Postgres>,
        id: AccountId,
    ) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"SELECT account_id, username, birthdate, balance, created_at
               FROM accounts WHERE account_id = $1
               FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Persist both sides of a transfer as one batched write inside the
    /// transaction.
    pub async fn save_pair(
        tx: &mut Transaction<'static, Postgres>,
        first: &Account,
        second: &Account,
    ) -> Result<(), sqlx::Error> {
        for account in [first, second] {
            sqlx::query("UPDATE accounts SET balance = $1 WHERE account_id = $2")
                .bind(account.balance)
                .bind(account.account_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    /// Plain read without a lock
    pub async fn get(&self, id: AccountId) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"SELECT account_id, username, birthdate, balance, created_at
               FROM accounts WHERE account_id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Create a new account, returning its generated id
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        birthdate: NaiveDate,
        opening_balance: Decimal,
    ) -> Result<AccountId, sqlx::Error> {
        let account_id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO accounts (account_id, username, password_hash, birthdate, balance)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(account_id)
        .bind(username)
        .bind(password_hash)
        .bind(birthdate)
        .bind(opening_balance)
        .execute(&self.pool)
        .await?;

        Ok(account_id)
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, sqlx::Error> {
        let row = sqlx::query_scalar::<_, i32>("SELECT 1 FROM accounts WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn get_auth_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AuthRecord>, sqlx::Error> {
        sqlx::query_as::<_, AuthRecord>(
            r#"SELECT account_id, username, password_hash
               FROM accounts WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// All accounts in creation order, without credentials
    pub async fn list(&self) -> Result<Vec<AccountSummary>, sqlx::Error> {
        sqlx::query_as::<_, AccountSummary>(
            r#"SELECT account_id, username, birthdate, balance
               FROM accounts ORDER BY created_at"#,
        )
        .fetch_all(&self.pool)
        .await
    }
}

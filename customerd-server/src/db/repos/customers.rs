//! Customer repository
//!
//! One statement per operation, all values bound as `$n` parameters.
//! Mutations target a single row by primary key and use `RETURNING` so the
//! caller learns whether anything matched without a second round-trip.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::CustomerStore;
use crate::models::{Customer, CustomerId, CustomerUpdate, NewCustomer};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Statement refused by a constraint (in-process store)
    #[error("{0}")]
    Rejected(String),

    /// Store could not be reached (in-process store)
    #[error("{0}")]
    Unavailable(String),
}

impl StoreError {
    /// Underlying failure text, as reported by the store.
    ///
    /// For Postgres errors this is the server's own message (e.g. the
    /// not-null violation text), without the sqlx prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Sqlx(sqlx::Error::Database(db)) => db.message().to_owned(),
            Self::Sqlx(e) => e.to_string(),
            Self::Rejected(msg) | Self::Unavailable(msg) => msg.clone(),
        }
    }
}

/// Postgres-backed customer store.
///
/// Cloning is cheap: `PgPool` is reference counted.
#[derive(Clone)]
pub struct CustomerRepo {
    pool: PgPool,
}

impl CustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for CustomerRepo {
    async fn create(&self, input: NewCustomer) -> Result<Customer, StoreError> {
        let kyc_status = input.kyc_status_or_default();
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, phone, kyc_status)
            VALUES ($1, $2, $3, $4)
            RETURNING customer_id, name, email, phone, kyc_status
            "#,
        )
        .bind(input.name)
        .bind(input.email)
        .bind(input.phone)
        .bind(kyc_status)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(customer_id = customer.customer_id, "customer inserted");
        Ok(customer)
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let rows = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, name, email, phone, kyc_status
            FROM customers
            ORDER BY customer_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, name, email, phone, kyc_status
            FROM customers
            WHERE customer_id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: CustomerId,
        input: CustomerUpdate,
    ) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $1, email = $2, phone = $3, kyc_status = $4
            WHERE customer_id = $5
            RETURNING customer_id, name, email, phone, kyc_status
            "#,
        )
        .bind(input.name)
        .bind(input.email)
        .bind(input.phone)
        .bind(input.kyc_status)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            DELETE FROM customers
            WHERE customer_id = $1
            RETURNING customer_id, name, email, phone, kyc_status
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn server_time(&self) -> Result<DateTime<Utc>, StoreError> {
        let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }
}

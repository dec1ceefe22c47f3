//! Schema bootstrap for the customers table

use sqlx::PgPool;

/// Create the `customers` table if it does not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running customer migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            customer_id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            kyc_status BOOLEAN DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Customer migrations complete");
    Ok(())
}

//! Store reachability check (CLI counterpart of GET /db-check)

use anyhow::{Context, Result};
use clap::Parser;

use customerd_server::db::{create_pool, DbConfig};
use customerd_server::{CustomerRepo, CustomerStore};

use crate::config::DbArgs;

/// Arguments for the db-check command
#[derive(Parser, Debug)]
pub struct DbCheckArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Query the store clock and print it
pub async fn run_db_check(args: DbCheckArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("DB connection failed ({})", db_config.describe()))?;

    let repo = CustomerRepo::new(pool.clone());
    let result = repo.server_time().await;
    pool.close().await;

    let now = result.map_err(|e| anyhow::anyhow!("DB connection failed: {}", e.message()))?;
    println!("DB connected. Server time now: {}", now.to_rfc3339());
    Ok(())
}

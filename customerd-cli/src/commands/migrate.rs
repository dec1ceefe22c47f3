//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use customerd_server::db::{create_pool, migrations, DbConfig};

use crate::config::DbArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Create the customers table and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to database at {}", db_config.describe()))?;

    let result = migrations::run(&pool).await;
    pool.close().await;
    result.context("Failed to run migrations")?;

    println!("customers table ready");
    Ok(())
}

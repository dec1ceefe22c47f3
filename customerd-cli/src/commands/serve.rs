//! HTTP server command
//!
//! Owns the pool lifecycle: connect (and optionally migrate) before
//! serving, close after the server has drained.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use customerd_server::db::{create_pool, migrations, DbConfig};
use customerd_server::{run_server, AppState, CustomerRepo, MemoryStore, ServerConfig};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8081)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Don't create the customers table on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Serve from an in-process store instead of Postgres (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    tracing::info!("Starting customer service on {}", config.bind_addr);

    if args.in_memory {
        tracing::warn!("Using in-memory store; records will not persist");
        return run_server(AppState::new(MemoryStore::new()), config)
            .await
            .context("Server error");
    }

    let db_config = DbConfig::from(args.db);
    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to database at {}", db_config.describe()))?;
    tracing::info!(
        target_db = %db_config.describe(),
        max_connections = db_config.max_connections,
        "Database pool ready"
    );

    if !args.skip_migrations {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let result = run_server(AppState::new(CustomerRepo::new(pool.clone())), config).await;

    // Waits for borrowed connections to come back before closing them.
    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")
}

//! customerd - customer record service
//!
//! Entry point for the service binary:
//! - `serve`: HTTP API over the customers table
//! - `migrate`: create the customers table
//! - `db-check`: verify the store is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "customerd",
    author,
    version,
    about = "Customer record service: CRUD over a Postgres customers table"
)]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the customers table if missing
    Migrate(commands::migrate::MigrateArgs),
    /// Check that the database is reachable and print its clock
    DbCheck(commands::db_check::DbCheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env fallbacks
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;
    config::report_dotenv(&dotenv);

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::DbCheck(args) => commands::run_db_check(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}

//! Command implementations for customerd CLI

pub mod db_check;
pub mod migrate;
pub mod serve;

pub use db_check::run_db_check;
pub use migrate::run_migrate;
pub use serve::run_serve;

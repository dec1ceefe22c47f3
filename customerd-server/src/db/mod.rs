//! Database layer - connection pool, schema bootstrap, and customer store
//!
//! # Design Principles
//!
//! - One pooled connection borrowed per statement, released on every exit path
//! - Every value is a bound parameter, never interpolated into SQL text
//! - No transactions: each operation is a single statement

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, DbConfig};
pub use repos::{CustomerRepo, StoreError};
pub use store::CustomerStore;

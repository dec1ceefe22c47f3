//! customerd-server: customer record service over Postgres
//!
//! Maps HTTP requests onto parameterized statements against a single
//! `customers` table and back to JSON, plus liveness and store-reachability
//! probes.

pub mod db;
pub mod http;
pub mod models;

pub use db::{CustomerRepo, CustomerStore, MemoryStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Customer, CustomerId, CustomerUpdate, NewCustomer};

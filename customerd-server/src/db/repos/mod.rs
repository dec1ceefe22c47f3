//! Repository implementations for database access

pub mod customers;

pub use customers::{CustomerRepo, StoreError};

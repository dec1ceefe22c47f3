//! Domain models
//!
//! Request bodies are deliberately lenient: required columns are passed
//! through to the store, whose constraints decide what is accepted.

pub mod customer;
pub mod validation;

pub use customer::{Customer, CustomerEnvelope, CustomerId, CustomerUpdate, MessageResponse, NewCustomer};
pub use validation::ValidationError;

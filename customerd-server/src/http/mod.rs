//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - CORS (localhost only by default)
//! - Graceful shutdown
//! - JSON error bodies (`{"error"}` / `{"message"}`)

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};

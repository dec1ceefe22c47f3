//! Customer store trait (testable seam between handlers and Postgres)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::StoreError;
use crate::models::{Customer, CustomerId, CustomerUpdate, NewCustomer};

/// The five record operations plus a reachability probe.
///
/// Each call is a single statement: it fully succeeds or fully fails.
/// Id-targeted operations return `None` when no row matched.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn create(&self, input: NewCustomer) -> Result<Customer, StoreError>;

    /// All customers ordered by `customer_id` ascending.
    async fn list(&self) -> Result<Vec<Customer>, StoreError>;

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    async fn update(
        &self,
        id: CustomerId,
        input: CustomerUpdate,
    ) -> Result<Option<Customer>, StoreError>;

    async fn delete(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    /// Current time according to the store.
    async fn server_time(&self) -> Result<DateTime<Utc>, StoreError>;
}

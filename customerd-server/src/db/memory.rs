//! In-process customer store
//!
//! Mirrors the Postgres table semantics closely enough for router tests and
//! `customerd serve --in-memory`: ids come from a monotonic sequence, listing
//! is ordered by id, and the NOT NULL columns reject missing values.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{CustomerStore, StoreError};
use crate::models::{Customer, CustomerId, CustomerUpdate, NewCustomer};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Customer>,
    next_id: i32,
}

/// Customer store backed by a `BTreeMap`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    table: Arc<RwLock<Table>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `message`, as if unreachable.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => Ok(()),
        }
    }
}

fn not_null(column: &str, value: Option<String>) -> Result<String, StoreError> {
    value.ok_or_else(|| {
        StoreError::Rejected(format!(
            "null value in column \"{column}\" of relation \"customers\" violates not-null constraint"
        ))
    })
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn create(&self, input: NewCustomer) -> Result<Customer, StoreError> {
        self.check()?;
        let kyc_status = input.kyc_status_or_default();
        let name = not_null("name", input.name)?;
        let email = not_null("email", input.email)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        let customer = Customer {
            customer_id: table.next_id,
            name: Some(name),
            email: Some(email),
            phone: input.phone,
            kyc_status: Some(kyc_status),
        };
        table.rows.insert(customer.customer_id, customer.clone());
        Ok(customer)
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        self.check()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        Ok(self.table.read().await.rows.get(&id.get()).cloned())
    }

    async fn update(
        &self,
        id: CustomerId,
        input: CustomerUpdate,
    ) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id.get()) else {
            return Ok(None);
        };
        // Constraints are checked before any column is touched.
        let name = not_null("name", input.name)?;
        let email = not_null("email", input.email)?;

        row.name = Some(name);
        row.email = Some(email);
        row.phone = input.phone;
        row.kyc_status = input.kyc_status;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.check()?;
        Ok(self.table.write().await.rows.remove(&id.get()))
    }

    async fn server_time(&self) -> Result<DateTime<Utc>, StoreError> {
        self.check()?;
        Ok(Utc::now())
    }
}

//! Customer record and request/response bodies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Customer row as stored in `customers`.
///
/// `customer_id` is assigned by the store and never changes afterwards.
/// Every other column is decoded as nullable: whether `name` and `email`
/// may be NULL is up to the table's constraints, not this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kyc_status: Option<bool>,
}

/// Store-assigned customer identifier, parsed from a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "customer id" });
        }
        s.parse::<i32>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "customer id",
            reason: "must be an integer",
        })
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// POST /customers body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<bool>,
}

impl NewCustomer {
    /// KYC flag to insert; absent and `null` both mean `false`.
    pub fn kyc_status_or_default(&self) -> bool {
        self.kyc_status.unwrap_or(false)
    }
}

/// PUT /customers/{id} body. Full replace: absent fields are written as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<bool>,
}

/// `{ "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": ..., "customer": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerEnvelope {
    pub message: String,
    pub customer: Customer,
}

//! Customer CRUD endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidCustomerId};
use crate::http::server::AppState;
use crate::models::{Customer, CustomerEnvelope, CustomerUpdate, MessageResponse, NewCustomer};

/// POST /customers - insert a customer, store assigns the id
async fn create_customer(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewCustomer>,
) -> Result<(StatusCode, Json<CustomerEnvelope>), ApiError> {
    let customer = state.store().create(body).await?;
    tracing::info!(customer_id = customer.customer_id, "customer created");

    Ok((
        StatusCode::CREATED,
        Json(CustomerEnvelope {
            message: "Customer added successfully".to_string(),
            customer,
        }),
    ))
}

/// GET /customers - every customer, ascending id, no envelope
async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.store().list().await?))
}

/// GET /customers/{id}
async fn get_customer(
    State(state): State<AppState>,
    ValidCustomerId(id): ValidCustomerId,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.store().get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(customer))
}

/// PUT /customers/{id} - full replace of the mutable fields
async fn update_customer(
    State(state): State<AppState>,
    ValidCustomerId(id): ValidCustomerId,
    JsonBody(body): JsonBody<CustomerUpdate>,
) -> Result<Json<CustomerEnvelope>, ApiError> {
    let customer = state
        .store()
        .update(id, body)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(customer_id = customer.customer_id, "customer updated");

    Ok(Json(CustomerEnvelope {
        message: "Customer updated successfully".to_string(),
        customer,
    }))
}

/// DELETE /customers/{id}
async fn delete_customer(
    State(state): State<AppState>,
    ValidCustomerId(id): ValidCustomerId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store().delete(id).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(customer_id = %id, "customer deleted");

    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}

/// Customer routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

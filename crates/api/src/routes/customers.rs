//! Customer endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use common::CustomerId;
use domain::{CreateCustomerRequest, CustomerDto};
use store::Store;

use crate::AppState;
use crate::error::ApiError;

/// GET /customers — list all customers.
#[tracing::instrument(skip(state))]
pub async fn list<S: Store>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state.customers.list_customers().await?;
    Ok(Json(customers))
}

/// GET /customers/:id — look up one customer.
#[tracing::instrument(skip(state))]
pub async fn get<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDto>, ApiError> {
    let customer = state
        .customers
        .get_customer(CustomerId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Customer with ID {id} not found")))?;
    Ok(Json(customer))
}

/// POST /customers — create a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CustomerDto>), ApiError> {
    let created = state.customers.create_customer(req).await?;
    let location = format!("/customers/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

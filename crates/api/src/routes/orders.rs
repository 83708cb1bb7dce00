//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use common::OrderId;
use domain::{CreateOrderRequest, OrderSummary, UpdateOrderStatusRequest};
use serde::Serialize;
use store::Store;

use crate::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct UpdateStatusResponse {
    pub message: &'static str,
}

/// POST /orders — place a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<OrderSummary>), ApiError> {
    let summary = state.orders.create_order(req).await?;
    let location = format!("/orders/{}", summary.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(summary),
    ))
}

/// GET /orders/:id — look up an order summary.
#[tracing::instrument(skip(state))]
pub async fn get<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderSummary>, ApiError> {
    let summary = state
        .orders
        .get_order(OrderId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order with ID {id} not found")))?;
    Ok(Json(summary))
}

/// POST /orders/UpdateOrderStatus/:id — update an order's status.
///
/// Marking an order `Delivered` decrements each line's product stock.
#[tracing::instrument(skip(state, req))]
pub async fn update_status<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    state.orders.update_status(OrderId::new(id), req).await?;
    Ok(Json(UpdateStatusResponse {
        message: "Order status updated successfully",
    }))
}

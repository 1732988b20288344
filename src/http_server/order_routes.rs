//! Order HTTP Routes
//!
//! Create and fetch orders. The caller supplies only the two foreign
//! keys; creation stamps the current time and defaults the status to
//! `pending`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Order, OrderStatus};
use crate::store::Store;

use super::errors::{ApiError, ApiResult};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: i64,
    pub product_id: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            product_id: order.product_id,
            order_date: order.order_date,
            status: order.status,
        }
    }
}

// ==================
// Order Routes
// ==================

/// Create order routes
pub fn order_routes(store: Arc<Store>) -> Router {
    Router::new()
        .route("/orders/", post(create_order_handler))
        .route("/orders/{order_id}", get(get_order_handler))
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn create_order_handler(
    State(store): State<Arc<Store>>,
    Json(request): Json<CreateOrderRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let order = store
        .insert_order(
            request.user_id,
            request.product_id,
            Utc::now(),
            OrderStatus::Pending,
        )
        .await?;

    tracing::info!(
        order_id = order.id,
        user_id = order.user_id,
        product_id = order.product_id,
        "order created"
    );
    Ok(Json(OrderResponse::from(order)))
}

async fn get_order_handler(
    State(store): State<Arc<Store>>,
    Path(order_id): Path<i64>,
) -> ApiResult<Json<OrderResponse>> {
    let order = store
        .get_order(order_id)
        .await?
        .ok_or(ApiError::NotFound("Order not found"))?;

    Ok(Json(OrderResponse::from(order)))
}

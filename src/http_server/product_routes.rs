//! Product HTTP Routes
//!
//! Create and fetch products. Orders for a product are reachable at
//! `/products/{product_id}/orders`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::model::Product;
use crate::store::Store;

use super::errors::{ApiError, ApiResult};
use super::order_routes::OrderResponse;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    /// Minor currency units
    pub price: i64,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(store: Arc<Store>) -> Router {
    Router::new()
        .route("/products/", post(create_product_handler))
        .route("/products/{product_id}", get(get_product_handler))
        .route("/products/{product_id}/orders", get(list_product_orders_handler))
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn create_product_handler(
    State(store): State<Arc<Store>>,
    Json(request): Json<CreateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = store
        .insert_product(&request.name, &request.description, request.price)
        .await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(Json(ProductResponse::from(product)))
}

async fn get_product_handler(
    State(store): State<Arc<Store>>,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<ProductResponse>> {
    let product = store
        .get_product(product_id)
        .await?
        .ok_or(ApiError::NotFound("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

async fn list_product_orders_handler(
    State(store): State<Arc<Store>>,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    if store.get_product(product_id).await?.is_none() {
        return Err(ApiError::NotFound("Product not found"));
    }

    let orders = store.orders_for_product(product_id).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

//! User HTTP Routes
//!
//! Create and fetch users. Orders placed by a user are reachable at
//! `/users/{user_id}/orders`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::model::User;
use crate::store::Store;

use super::errors::{ApiError, ApiResult};
use super::order_routes::OrderResponse;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Wire shape for a user; the stored password is withheld
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

// ==================
// User Routes
// ==================

/// Create user routes.
///
/// The create path keeps its trailing slash; `/users` and `/users/`
/// are distinct routes and only the latter exists.
pub fn user_routes(store: Arc<Store>) -> Router {
    Router::new()
        .route("/users/", post(create_user_handler))
        .route("/users/{user_id}", get(get_user_handler))
        .route("/users/{user_id}/orders", get(list_user_orders_handler))
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn create_user_handler(
    State(store): State<Arc<Store>>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = store
        .insert_user(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.password,
        )
        .await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(Json(UserResponse::from(user)))
}

async fn get_user_handler(
    State(store): State<Arc<Store>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = store
        .get_user(user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

async fn list_user_orders_handler(
    State(store): State<Arc<Store>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    if store.get_user(user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found"));
    }

    let orders = store.orders_for_user(user_id).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

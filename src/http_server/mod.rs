//! # shopd HTTP Server Module
//!
//! Axum-based HTTP surface for the service. One routes file per
//! resource, each owning its request/response wire shapes.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/users/*` - Create and fetch users
//! - `/products/*` - Create and fetch products
//! - `/orders/*` - Create and fetch orders

pub mod config;
pub mod errors;
pub mod order_routes;
pub mod product_routes;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;

//! shopd - a minimal commerce service
//!
//! Users, products and orders over HTTP, backed by a SQLite store.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;

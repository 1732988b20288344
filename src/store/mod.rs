//! Relational store for shopd
//!
//! The store is an explicitly constructed client around a SQLite
//! connection pool. It is created once at process start, handed to the
//! HTTP layer as shared state, and never held in a global.
//!
//! # Session model
//!
//! Every operation acquires one pooled connection, uses it for a single
//! statement, and returns it on every exit path (the connection guard
//! drops on success and on error alike). Nothing spans requests and no
//! application-level transaction spans multiple operations.
//!
//! # Integrity
//!
//! - `users.email` is UNIQUE; a duplicate insert fails with
//!   [`StoreError::UniqueViolation`].
//! - `orders.user_id` / `orders.product_id` are enforced foreign keys
//!   (`PRAGMA foreign_keys = ON`); a dangling insert fails with
//!   [`StoreError::ForeignKeyViolation`].
//! - Identities come from `INTEGER PRIMARY KEY AUTOINCREMENT`: assigned
//!   by the store, monotone, never reused.

mod errors;
mod orders;
mod products;
mod schema;
mod users;

pub use errors::{StoreError, StoreResult};

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Storage client shared by all request handlers
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the database file and ensure the schema exists.
    ///
    /// Called once at process start; a malformed schema fails here, not
    /// at request time.
    pub async fn open(path: &Path) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the users/products/orders tables if they are missing.
    ///
    /// Idempotent; safe to run on an already-populated database.
    async fn ensure_schema(&self) -> StoreResult<()> {
        let mut conn = self.pool.acquire().await?;
        for &ddl in schema::TABLES {
            sqlx::query(ddl).execute(&mut *conn).await?;
        }
        Ok(())
    }
}

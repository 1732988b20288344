//! Product record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Store-assigned identity, monotone, never reused
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in minor currency units (e.g. cents)
    pub price: i64,
}

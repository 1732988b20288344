//! Order record and its status enumeration

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle status of an order.
///
/// Closed set: exactly these three values are valid on the wire and in
/// the store, serialized as the lowercase strings `pending`,
/// `completed` and `canceled`. Every read site matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Returns the wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user buying a product.
///
/// `user_id` and `product_id` are explicit foreign keys; the store
/// enforces that both resolve to existing rows at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Store-assigned identity, monotone, never reused
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    /// Stamped at creation; the caller never supplies it
    pub order_date: DateTime<Utc>,
    /// Defaults to `pending`; this service never transitions it
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Completed.as_str(), "completed");
        assert_eq!(OrderStatus::Canceled.as_str(), "canceled");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let parsed: OrderStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Canceled);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<OrderStatus>("\"shipped\"");
        assert!(result.is_err());
    }
}

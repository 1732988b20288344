//! Order persistence operations
//!
//! Orders carry the only enforced foreign keys in the schema; inserts
//! with a dangling `user_id` or `product_id` are rejected here rather
//! than left to accumulate as unreadable references.

use chrono::{DateTime, Utc};

use crate::model::{Order, OrderStatus};

use super::{Store, StoreError, StoreResult};

const ORDER_COLUMNS: &str = "id, user_id, product_id, order_date, status";

impl Store {
    /// Insert an order and return the persisted row, identity included.
    ///
    /// Fails with [`StoreError::ForeignKeyViolation`] if either
    /// reference does not resolve to an existing row.
    pub async fn insert_order(
        &self,
        user_id: i64,
        product_id: i64,
        order_date: DateTime<Utc>,
        status: OrderStatus,
    ) -> StoreResult<Order> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (user_id, product_id, order_date, status)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, user_id, product_id, order_date, status",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(order_date)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            StoreError::classify(
                e,
                "Order insert violated a unique constraint",
                "Order references a user or product that does not exist",
            )
        })
    }

    /// Look up an order by primary key
    pub async fn get_order(&self, id: i64) -> StoreResult<Option<Order>> {
        let mut conn = self.pool.acquire().await?;
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {} FROM orders WHERE id = ?1",
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(order)
    }

    /// All orders placed by one user, oldest first
    pub async fn orders_for_user(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        let mut conn = self.pool.acquire().await?;
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {} FROM orders WHERE user_id = ?1 ORDER BY id",
            ORDER_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(orders)
    }

    /// All orders for one product, oldest first
    pub async fn orders_for_product(&self, product_id: i64) -> StoreResult<Vec<Order>> {
        let mut conn = self.pool.acquire().await?;
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {} FROM orders WHERE product_id = ?1 ORDER BY id",
            ORDER_COLUMNS
        ))
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(orders)
    }
}

//! Product persistence operations

use crate::model::Product;

use super::{Store, StoreResult};

impl Store {
    /// Insert a product and return the persisted row, identity included
    pub async fn insert_product(
        &self,
        name: &str,
        description: &str,
        price: i64,
    ) -> StoreResult<Product> {
        let mut conn = self.pool.acquire().await?;
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price)
             VALUES (?1, ?2, ?3)
             RETURNING id, name, description, price",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .fetch_one(&mut *conn)
        .await?;
        Ok(product)
    }

    /// Look up a product by primary key
    pub async fn get_product(&self, id: i64) -> StoreResult<Option<Product>> {
        let mut conn = self.pool.acquire().await?;
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(product)
    }
}

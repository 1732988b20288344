//! User persistence operations

use crate::model::User;

use super::{Store, StoreError, StoreResult};

const USER_COLUMNS: &str = "id, first_name, last_name, email, password";

impl Store {
    /// Insert a user and return the persisted row, identity included.
    ///
    /// Fails with [`StoreError::UniqueViolation`] if the email is
    /// already registered.
    pub async fn insert_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> StoreResult<User> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, first_name, last_name, email, password",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            StoreError::classify(
                e,
                "Email is already registered",
                "User insert violated a reference",
            )
        })
    }

    /// Look up a user by primary key
    pub async fn get_user(&self, id: i64) -> StoreResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = ?1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }
}

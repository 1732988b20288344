//! User record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// `password` is stored as given and never leaves the store layer in an
/// HTTP response; the wire shape in `http_server::user_routes` withholds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identity, monotone, never reused
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Globally unique across all users
    pub email: String,
    pub password: String,
}

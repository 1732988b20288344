//! Record kinds for shopd
//!
//! Three entities and one closed enumeration:
//!
//! - `User` - a registered account
//! - `Product` - a purchasable item
//! - `Order` - a user buying a product, with a status and timestamp
//!
//! Relationships are plain foreign-key fields (`Order.user_id`,
//! `Order.product_id`); traversal in the other direction is a query on
//! the store, never a live object reference.

mod order;
mod product;
mod user;

pub use order::{Order, OrderStatus};
pub use product::Product;
pub use user::User;

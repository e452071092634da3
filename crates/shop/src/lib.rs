//! Storage collaborator for the shop database.
//!
//! Holds the row models for `users`, `products` and `orders` and the
//! [`Database`](database::Database) handle that issues the per-table queries.
//! The schema itself is owned elsewhere; nothing here creates or migrates it.

pub mod database;
pub mod errors;
pub mod models;

pub use database::{Database, Table};
pub use errors::ShopError;
pub use models::{NewOrder, NewProduct, NewUser, Order, Product, User};

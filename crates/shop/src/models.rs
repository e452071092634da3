use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Role every seeded account starts with.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub address: String,
    pub roles: Vec<String>,
}

/// User fields supplied on insert; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub address: String,
    pub roles: Vec<String>,
}

impl NewUser {
    pub fn new(email: String, name: String, address: String) -> Self {
        Self {
            email,
            name,
            address,
            roles: vec![DEFAULT_ROLE.to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

/// An order together with the products it is linked to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub total: Decimal,
    pub user_id: Uuid,
    pub stripe_invoice_id: String,
    pub product_ids: Vec<Uuid>,
}

/// Order fields supplied on insert.
///
/// `total` is stored as given; it is not recomputed from the linked
/// products' prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub total: Decimal,
    pub user_id: Uuid,
    pub stripe_invoice_id: String,
    pub product_ids: Vec<Uuid>,
}

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ShopError;
use crate::models::{NewOrder, NewProduct, NewUser, Order, Product, User};

/// Tables written by the seeder, in the order their rows must be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Orders,
    Products,
    Users,
}

impl Table {
    /// Dependents first: orders reference both products and users.
    pub const DELETION_ORDER: [Table; 3] = [Table::Orders, Table::Products, Table::Users];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Orders => "orders",
            Table::Products => "products",
            Table::Users => "users",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Deletes every row of `table` and returns how many rows went away.
    ///
    /// Clearing `orders` also clears `order_products`, since those join rows
    /// belong to the orders. No other cascading is done here: deleting users
    /// or products that orders still reference fails with a foreign-key error.
    pub async fn delete_all(&self, table: Table) -> Result<u64, ShopError> {
        if table == Table::Orders {
            let links = sqlx::query("DELETE FROM order_products")
                .execute(&self.pool)
                .await?;
            debug!("Deleted {} order-product links", links.rows_affected());
        }

        let result = sqlx::query(&format!("DELETE FROM {}", table.as_str()))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self, table: Table) -> Result<i64, ShopError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table.as_str()))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ShopError> {
        let created = sqlx::query_as(
            r#"
            INSERT INTO users (email, name, address, roles)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, address, roles
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.address)
        .bind(&user.roles)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ShopError> {
        let created = sqlx::query_as(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Inserts an order and links it to its products.
    ///
    /// The order row and its `order_products` rows commit together.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ShopError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO orders (total, user_id, stripe_invoice_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(order.total)
        .bind(order.user_id)
        .bind(&order.stripe_invoice_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO order_products (order_id, product_id)
            SELECT $1, product_id FROM UNNEST($2::uuid[]) AS t(product_id)
            "#,
        )
        .bind(id)
        .bind(&order.product_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Order {
            id,
            total: order.total,
            user_id: order.user_id,
            stripe_invoice_id: order.stripe_invoice_id.clone(),
            product_ids: order.product_ids.clone(),
        })
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ShopError> {
        let users = sqlx::query_as(
            r#"
            SELECT id, email, name, address, roles
            FROM users
            ORDER BY email
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ShopError> {
        let products = sqlx::query_as(
            r#"
            SELECT id, name, price
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Returns every order with the ids of its linked products.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ShopError> {
        let orders = sqlx::query_as(
            r#"
            SELECT o.id, o.total, o.user_id, o.stripe_invoice_id,
                   COALESCE(
                       ARRAY_AGG(op.product_id) FILTER (WHERE op.product_id IS NOT NULL),
                       '{}'
                   ) AS product_ids
            FROM orders o
            LEFT JOIN order_products op ON op.order_id = o.id
            GROUP BY o.id
            ORDER BY o.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

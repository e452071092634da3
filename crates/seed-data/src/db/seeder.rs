//! Database seeding utilities.

use futures::future::try_join_all;
use rand::Rng;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use shop::{Database, Order, Product, ShopError, Table, User};

use crate::config::SeedConfig;
use crate::generators::{OrderGenerator, ProductGenerator, UserGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Failed to clear {table}: {source}")]
    Wipe { table: Table, source: ShopError },
    #[error("Failed to create {entity}: {source}")]
    Create {
        entity: &'static str,
        source: ShopError,
    },
    #[error("Failed to count {table}: {source}")]
    Verify { table: Table, source: ShopError },
    #[error("No users available to own orders")]
    NoUsers,
    #[error("No products available to attach to orders")]
    NoProducts,
}

/// Rows removed from each table by [`Seeder::wipe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipeCounts {
    pub orders: u64,
    pub products: u64,
    pub users: u64,
}

/// Rows present in each table after seeding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct SeedSummary {
    pub wiped: WipeCounts,
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub counts: TableCounts,
}

/// Database seeder for one fixture run.
///
/// Owns the pool from [`Seeder::connect`] until [`Seeder::disconnect`]
/// consumes it.
pub struct Seeder {
    db: Database,
    user_count: usize,
    product_count: usize,
    order_count: usize,
    order_gen: OrderGenerator,
}

impl Seeder {
    /// Creates a new seeder over an existing pool with the default fixture sizes.
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: Database::new(pool),
            user_count: SeedConfig::DEFAULT_USERS,
            product_count: SeedConfig::DEFAULT_PRODUCTS,
            order_count: SeedConfig::DEFAULT_ORDERS,
            order_gen: OrderGenerator::new(),
        }
    }

    /// Opens the pool described by `config`.
    ///
    /// Nothing is read or written when this fails.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                error!("Database connection failed: {e}");
                SeedError::Connect(e)
            })?;

        info!("Database connected successfully");

        Ok(Self::new(pool)
            .with_users(config.user_count)
            .with_products(config.product_count)
            .with_orders(config.order_count))
    }

    pub fn with_users(mut self, count: usize) -> Self {
        self.user_count = count;
        self
    }

    pub fn with_products(mut self, count: usize) -> Self {
        self.product_count = count;
        self
    }

    pub fn with_orders(mut self, count: usize) -> Self {
        self.order_count = count;
        self
    }

    /// Replaces the order generator, e.g. to change how many products an order links.
    pub fn with_order_generator(mut self, order_gen: OrderGenerator) -> Self {
        self.order_gen = order_gen;
        self
    }

    /// Runs the whole procedure: wipe, users, products, orders, verify.
    ///
    /// Phases run strictly one after another. The first error aborts the run;
    /// rows written before it stay in place. The pool is left open, so callers
    /// still have to [`disconnect`](Self::disconnect).
    pub async fn run(&self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        let result = self.run_phases(rng).await;
        if let Err(e) = &result {
            error!("Seed run aborted: {e}");
        }
        result
    }

    async fn run_phases(&self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        let wiped = self.wipe().await?;
        let users = self.seed_users(rng).await?;
        let products = self.seed_products(rng).await?;
        let orders = self.seed_orders(&users, &products, rng).await?;
        let counts = self.verify().await?;

        Ok(SeedSummary {
            wiped,
            users,
            products,
            orders,
            counts,
        })
    }

    /// Clears all seeded data, dependents first.
    pub async fn wipe(&self) -> Result<WipeCounts, SeedError> {
        info!("Cleaning existing data...");

        let mut wiped = WipeCounts::default();
        for table in Table::DELETION_ORDER {
            let deleted = self.delete_all(table).await?;
            match table {
                Table::Orders => wiped.orders = deleted,
                Table::Products => wiped.products = deleted,
                Table::Users => wiped.users = deleted,
            }
        }

        info!(
            "Deleted: {} users, {} products, {} orders",
            wiped.users, wiped.products, wiped.orders
        );
        Ok(wiped)
    }

    /// Deletes every row of a single table.
    ///
    /// Fails if rows that still reference `table` exist elsewhere.
    pub async fn delete_all(&self, table: Table) -> Result<u64, SeedError> {
        self.db
            .delete_all(table)
            .await
            .map_err(|source| SeedError::Wipe { table, source })
    }

    /// Generates and inserts users concurrently.
    pub async fn seed_users(&self, rng: &mut impl Rng) -> Result<Vec<User>, SeedError> {
        let users = UserGenerator::new().generate_batch(self.user_count, rng);
        info!("Creating {} users...", users.len());

        let created = try_join_all(users.iter().map(|user| async move {
            let created = self.db.create_user(user).await?;
            info!("Created user: {}", created.email);
            Ok::<_, ShopError>(created)
        }))
        .await
        .map_err(|source| SeedError::Create {
            entity: "user",
            source,
        })?;

        info!("Created {} users", created.len());
        Ok(created)
    }

    /// Generates and inserts products concurrently.
    pub async fn seed_products(&self, rng: &mut impl Rng) -> Result<Vec<Product>, SeedError> {
        let products = ProductGenerator::new().generate_batch(self.product_count, rng);
        info!("Creating {} products...", products.len());

        let created = try_join_all(products.iter().map(|product| async move {
            let created = self.db.create_product(product).await?;
            info!("Created product: {}", created.name);
            Ok::<_, ShopError>(created)
        }))
        .await
        .map_err(|source| SeedError::Create {
            entity: "product",
            source,
        })?;

        info!("Created {} products", created.len());
        Ok(created)
    }

    /// Generates and inserts orders over the given users and products.
    pub async fn seed_orders(
        &self,
        users: &[User],
        products: &[Product],
        rng: &mut impl Rng,
    ) -> Result<Vec<Order>, SeedError> {
        if self.order_count == 0 {
            return Ok(Vec::new());
        }
        if users.is_empty() {
            return Err(SeedError::NoUsers);
        }
        if products.is_empty() {
            return Err(SeedError::NoProducts);
        }

        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
        let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let orders = self
            .order_gen
            .generate_batch(self.order_count, &user_ids, &product_ids, rng);
        info!("Creating {} orders...", orders.len());

        let created = try_join_all(orders.iter().map(|order| async move {
            let created = self.db.create_order(order).await?;
            info!(
                "Created order: {} for user {}",
                created.id, created.user_id
            );
            Ok::<_, ShopError>(created)
        }))
        .await
        .map_err(|source| SeedError::Create {
            entity: "order",
            source,
        })?;

        info!("Created {} orders", created.len());
        Ok(created)
    }

    /// Reads back the row count of every table.
    ///
    /// A count that differs from the configured size is only warned about;
    /// another seeder may be writing to the same database.
    pub async fn verify(&self) -> Result<TableCounts, SeedError> {
        let count = |table: Table| async move {
            self.db
                .count(table)
                .await
                .map_err(|source| SeedError::Verify { table, source })
        };

        let counts = TableCounts {
            users: count(Table::Users).await?,
            products: count(Table::Products).await?,
            orders: count(Table::Orders).await?,
        };

        info!(
            "Final counts: {} users, {} products, {} orders",
            counts.users, counts.products, counts.orders
        );

        let expected = [
            (Table::Users, counts.users, self.user_count),
            (Table::Products, counts.products, self.product_count),
            (Table::Orders, counts.orders, self.order_count),
        ];
        for (table, actual, wanted) in expected {
            if usize::try_from(actual).ok() != Some(wanted) {
                warn!("Expected {wanted} rows in {table}, found {actual}");
            }
        }

        Ok(counts)
    }

    /// Runs the procedure once and closes the pool, whether or not the run succeeded.
    pub async fn run_once(self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        let outcome = self.run(rng).await;
        self.disconnect().await;
        outcome
    }

    /// Closes the pool. Waits for in-flight connections to be returned.
    pub async fn disconnect(self) {
        info!("Disconnecting from database...");
        self.db.pool().close().await;
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Connects with `config`, seeds once and disconnects.
///
/// Nothing is touched when the connection fails; after a successful connect
/// the pool is closed on every path.
pub async fn seed(config: &SeedConfig) -> Result<SeedSummary, SeedError> {
    let mut rng = config.rng();
    let seeder = Seeder::connect(config).await?;
    seeder.run_once(&mut rng).await
}

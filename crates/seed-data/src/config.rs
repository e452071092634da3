//! Configuration types for seeding runs.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the Postgres connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Optional pool size override.
pub const MAX_CONNECTIONS_VAR: &str = "SEED_MAX_CONNECTIONS";
/// Optional seed for a reproducible run.
pub const RNG_SEED_VAR: &str = "SEED_RNG_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedConfig {
    /// Postgres connection string. Never serialized so it cannot end up in logs.
    #[serde(skip_serializing)]
    pub database_url: String,

    /// Maximum pool connections shared by the concurrent inserts.
    pub max_connections: u32,

    /// How long an insert may wait for a pooled connection.
    pub acquire_timeout_secs: u64,

    /// Number of users to generate.
    pub user_count: usize,

    /// Number of products to generate.
    pub product_count: usize,

    /// Number of orders to generate.
    pub order_count: usize,

    /// Seed for the random generator; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl SeedConfig {
    pub const DEFAULT_USERS: usize = 5;
    pub const DEFAULT_PRODUCTS: usize = 10;
    pub const DEFAULT_ORDERS: usize = 15;

    /// Creates a config with the default fixture sizes (5 users, 10 products, 15 orders).
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout_secs: 30,
            user_count: Self::DEFAULT_USERS,
            product_count: Self::DEFAULT_PRODUCTS,
            order_count: Self::DEFAULT_ORDERS,
            rng_seed: None,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR).filter(|url| !url.trim().is_empty());
        info!(
            "Database URL: {}",
            if database_url.is_some() { "set" } else { "missing" }
        );
        let mut config = Self::new(database_url.ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))?);

        if let Some(value) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        name: MAX_CONNECTIONS_VAR,
                        value,
                    });
                }
            };
        }

        if let Some(value) = lookup(RNG_SEED_VAR) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidVar {
                    name: RNG_SEED_VAR,
                    value: value.clone(),
                })?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }

    /// Sets the number of users to generate.
    pub fn with_users(mut self, count: usize) -> Self {
        self.user_count = count;
        self
    }

    /// Sets the number of products to generate.
    pub fn with_products(mut self, count: usize) -> Self {
        self.product_count = count;
        self
    }

    /// Sets the number of orders to generate.
    pub fn with_orders(mut self, count: usize) -> Self {
        self.order_count = count;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Returns the generator for this run: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

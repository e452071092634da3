//! Fixture seeding for the shop database.
//!
//! This crate fills a development database with synthetic users, products and
//! orders. Every run wipes the three tables first, so a run always ends with
//! the configured number of rows even though the values change each time.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let summary = seed(&config).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{SeedError, SeedSummary, Seeder, TableCounts, WipeCounts, seed};
    pub use crate::generators::{
        OrderGenConfig, OrderGenerator, ProductGenerator, UserGenerator, random_amount,
    };
    pub use shop::{NewOrder, NewProduct, NewUser, Order, Product, Table, User};
}

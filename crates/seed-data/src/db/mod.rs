//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] owns the connection pool for one run: it wipes the shop
//! tables, inserts generated users, products and orders in concurrent
//! batches, and reads the final counts back.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder, TableCounts, WipeCounts, seed};

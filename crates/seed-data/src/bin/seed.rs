//! Default seed script - wipes the shop tables and fills them with fixtures
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed
//! ```
//!
//! Exits with status 1 if any step fails.

use std::process::ExitCode;

use seed_data::config::SeedConfig;
use seed_data::db::{self, SeedSummary};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting seed...");

    match seed().await {
        Ok(summary) => {
            info!("Seed completed!");
            info!("  Users: {}", summary.users.len());
            info!("  Products: {}", summary.products.len());
            info!("  Orders: {}", summary.orders.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seed failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn seed() -> anyhow::Result<SeedSummary> {
    let config = SeedConfig::from_env()?;
    Ok(db::seed(&config).await?)
}

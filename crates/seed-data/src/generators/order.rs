//! Order generation.
//!
//! Orders only ever reference ids handed in by the caller, so an order can
//! never point at a user or product that was not created first.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use uuid::Uuid;

use shop::NewOrder;

use super::random_amount;

/// Configuration for order generation.
#[derive(Debug, Clone)]
pub struct OrderGenConfig {
    /// How many distinct products each order links to.
    pub products_per_order: RangeInclusive<usize>,
    /// Lowest order total, inclusive.
    pub min_total: u32,
    /// Highest order total, inclusive.
    pub max_total: u32,
    /// Length of the alphanumeric payment invoice id.
    pub invoice_id_len: usize,
}

impl Default for OrderGenConfig {
    fn default() -> Self {
        Self {
            products_per_order: 1..=3,
            min_total: 20,
            max_total: 500,
            invoice_id_len: 24,
        }
    }
}

/// Generates orders over already-created users and products.
pub struct OrderGenerator {
    config: OrderGenConfig,
}

impl OrderGenerator {
    /// Creates a new order generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: OrderGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: OrderGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single order.
    ///
    /// The owner is drawn uniformly with replacement; the products are drawn
    /// uniformly without replacement, so one order never lists a product
    /// twice. The total is random and independent of the product prices.
    /// Returns `None` when there is no user or no product to reference.
    pub fn generate(
        &self,
        user_ids: &[Uuid],
        product_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Option<NewOrder> {
        let user_id = *user_ids.choose(rng)?;

        let max = (*self.config.products_per_order.end()).min(product_ids.len());
        let min = (*self.config.products_per_order.start()).clamp(1, max.max(1));
        if max == 0 || min > max {
            return None;
        }
        let count = rng.gen_range(min..=max);
        let product_ids = product_ids.choose_multiple(rng, count).copied().collect();

        Some(NewOrder {
            total: random_amount(self.config.min_total, self.config.max_total, rng),
            user_id,
            stripe_invoice_id: self.generate_invoice_id(rng),
            product_ids,
        })
    }

    /// Generates up to `count` orders; empty when either id set is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        user_ids: &[Uuid],
        product_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<NewOrder> {
        (0..count)
            .map_while(|_| self.generate(user_ids, product_ids, rng))
            .collect()
    }

    fn generate_invoice_id(&self, rng: &mut impl Rng) -> String {
        std::iter::repeat_with(|| char::from(rng.sample(Alphanumeric)))
            .take(self.config.invoice_id_len)
            .collect()
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

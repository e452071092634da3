//! Entity generators for fixture data.
//!
//! Generators are pure: they take an injected [`rand::Rng`] and return insert
//! forms without touching the database.
//! - [`UserGenerator`]: users with unique emails and the default role
//! - [`ProductGenerator`]: catalog products with prices
//! - [`OrderGenerator`]: orders linking an existing user to existing products

pub mod order;
pub mod product;
pub mod user;

use rand::Rng;
use rust_decimal::Decimal;

pub use order::{OrderGenConfig, OrderGenerator};
pub use product::ProductGenerator;
pub use user::UserGenerator;

/// Returns a uniformly random amount in `[min, max]` with exactly two decimal places.
pub fn random_amount(min: u32, max: u32, rng: &mut impl Rng) -> Decimal {
    let cents = rng.gen_range(i64::from(min) * 100..=i64::from(max) * 100);
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_amount_bounds_and_scale() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let amount = random_amount(10, 1000, &mut rng);
            assert!(amount >= Decimal::new(10, 0));
            assert!(amount <= Decimal::new(1000, 0));
            assert_eq!(amount.scale(), 2);
        }
    }

    #[test]
    fn test_random_amount_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_amount(20, 20, &mut rng), Decimal::new(2000, 2));
    }
}

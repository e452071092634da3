//! Product generation.

use rand::Rng;
use rand::seq::SliceRandom;

use shop::NewProduct;

use super::random_amount;

/// Lowest generated price, inclusive.
pub const MIN_PRICE: u32 = 10;
/// Highest generated price, inclusive.
pub const MAX_PRICE: u32 = 1000;

const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty", "Elegant", "Modern", "Recycled",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Ceramic", "Marble",
];

const NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese",
    "Bacon", "Pizza", "Salad", "Sausages", "Chips",
];

/// Generates catalog products.
#[derive(Debug, Default)]
pub struct ProductGenerator;

impl ProductGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a product priced between [`MIN_PRICE`] and [`MAX_PRICE`].
    pub fn generate(&self, rng: &mut impl Rng) -> NewProduct {
        NewProduct {
            name: self.generate_name(rng),
            price: random_amount(MIN_PRICE, MAX_PRICE, rng),
        }
    }

    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<NewProduct> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generates a name such as `"Rustic Granite Chair"`.
    fn generate_name(&self, rng: &mut impl Rng) -> String {
        let adjective = pick(ADJECTIVES, rng);
        let material = pick(MATERIALS, rng);
        let noun = pick(NOUNS, rng);

        format!("{adjective} {material} {noun}")
    }
}

fn pick(words: &[&'static str], rng: &mut impl Rng) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

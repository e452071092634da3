//! User generation.

use std::collections::HashSet;

use fake::{
    Fake,
    faker::address::en::{BuildingNumber, StreetName},
    faker::name::en::Name,
};
use rand::Rng;
use rand::seq::SliceRandom;

use shop::NewUser;

const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "outlook.com", "yahoo.com", "proton.me"];

/// Generates fixture users.
#[derive(Debug, Default)]
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single user with the default role.
    pub fn generate(&self, rng: &mut impl Rng) -> NewUser {
        let name: String = Name().fake_with_rng(rng);
        let email = self.generate_email(&name, rng);
        let address = self.generate_address(rng);

        NewUser::new(email, name, address)
    }

    /// Generates `count` users whose emails are pairwise distinct.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<NewUser> {
        let mut seen = HashSet::with_capacity(count);
        let mut users = Vec::with_capacity(count);

        while users.len() < count {
            let user = self.generate(rng);
            if seen.insert(user.email.clone()) {
                users.push(user);
            }
        }

        users
    }

    /// Generates an email from a name.
    fn generate_email(&self, name: &str, rng: &mut impl Rng) -> String {
        let normalized: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..9999);
        let domain = EMAIL_DOMAINS.choose(rng).unwrap_or(&"example.com");

        format!("{normalized}{suffix}@{domain}")
    }

    /// Generates a street address such as `"4821 Maple Street"`.
    fn generate_address(&self, rng: &mut impl Rng) -> String {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        format!("{number} {street}")
    }
}

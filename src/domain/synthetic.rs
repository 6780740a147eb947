//! Synthetic user generation.
//!
//! Every product insert fabricates one user from these fixed lists. The
//! generated id is discarded; the database assigns the real identity.

use crate::domain::model::User;
use rand::distributions::Alphanumeric;
use rand::Rng;

pub const FIRST_NAMES: [&str; 9] = [
    "John", "Jane", "Alex", "Emily", "Chris", "Sarah", "Michael", "Olivia", "Terence",
];

pub const LAST_NAMES: [&str; 9] = [
    "Doe", "Smith", "Johnson", "Williams", "Soubramanien", "Jones", "Brown", "Davis", "Miller",
];

pub const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "ynov.com",
];

const EMAIL_LOCAL_PART_LEN: usize = 8;
const PASSWORD_LEN: usize = 10;

/// Draws one user uniformly from the fixed lists, with a random email local
/// part and password.
pub fn random_user() -> User {
    let mut rng = rand::thread_rng();
    let nom = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string();
    let prenom = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string();
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    User {
        id: rng.gen_range(0..1000),
        nom,
        prenom,
        email: format!("{}@{}", random_alphanumeric(EMAIL_LOCAL_PART_LEN), domain),
        mot_de_passe: random_alphanumeric(PASSWORD_LEN),
    }
}

fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

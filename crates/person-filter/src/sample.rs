//! Sample records for demonstrations and tests.
//!
//! [`sample_persons`] is the fixed four-record list the demo prints.
//! [`generate_persons`] produces larger reproducible lists: the same seed
//! always yields identical records.

use fake::Fake;
use fake::faker::name::raw::FirstName;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::person::Person;

/// Youngest generated age.
const MIN_AGE: u32 = 18;

/// Oldest generated age.
const MAX_AGE: u32 = 70;

/// One in three generated records is an admin.
const ADMIN_PROBABILITY_NUMERATOR: u32 = 1;
const ADMIN_PROBABILITY_DENOMINATOR: u32 = 3;

const OCCUPATIONS: &[&str] = &["Developer", "Designer", "Writer", "Analyst", "Teacher"];
const ROLES: &[&str] = &["Administrator", "CEO", "Moderator", "Auditor"];

/// Returns the four default records, two users and two admins, interleaved.
///
/// # Example
///
/// ```
/// use person_filter::{PersonKind, sample_persons};
///
/// let persons = sample_persons();
/// let names: Vec<_> = persons.iter().map(|p| p.name()).collect();
///
/// assert_eq!(names, ["Alice", "Bob", "Charlie", "Dave"]);
/// assert_eq!(persons[1].kind(), PersonKind::Admin);
/// ```
#[must_use]
pub fn sample_persons() -> Vec<Person> {
    vec![
        Person::user("Alice", 25, "Developer"),
        Person::admin("Bob", 40, "Administrator"),
        Person::user("Charlie", 25, "Designer"),
        Person::admin("Dave", 40, "CEO"),
    ]
}

/// Generates `count` records deterministically from `seed`.
///
/// Names come from the English first-name list, ages fall in
/// `18..=70`, and occupations and roles are drawn from short fixed lists so
/// that equality criteria regularly find several matches.
#[must_use]
pub fn generate_persons(seed: u64, count: usize) -> Vec<Person> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_person(&mut rng)).collect()
}

fn generate_person(rng: &mut ChaCha8Rng) -> Person {
    let name: String = FirstName(EN).fake_with_rng(rng);
    let age = rng.random_range(MIN_AGE..=MAX_AGE);
    if rng.random_ratio(ADMIN_PROBABILITY_NUMERATOR, ADMIN_PROBABILITY_DENOMINATOR) {
        Person::admin(name, age, pick(rng, ROLES))
    } else {
        Person::user(name, age, pick(rng, OCCUPATIONS))
    }
}

fn pick(rng: &mut ChaCha8Rng, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}

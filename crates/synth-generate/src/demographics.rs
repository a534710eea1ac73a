//! Demographic value provider.
//!
//! Factories never hard-code names, addresses or contact details; they ask a
//! [`DemographicProvider`] and pass in the generator's random source, so the
//! same seed reproduces the same people regardless of provider.

use chrono::{NaiveDate, TimeDelta};
use rand::RngCore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of realistic lexical and demographic values.
pub trait DemographicProvider: Send {
    fn first_name(&self, rng: &mut dyn RngCore) -> String;
    fn last_name(&self, rng: &mut dyn RngCore) -> String;
    fn street_address(&self, rng: &mut dyn RngCore) -> String;
    fn city(&self, rng: &mut dyn RngCore) -> String;
    fn state_abbr(&self, rng: &mut dyn RngCore) -> String;
    fn postcode(&self, rng: &mut dyn RngCore) -> String;
    fn phone_number(&self, rng: &mut dyn RngCore) -> String;
    fn email(&self, rng: &mut dyn RngCore) -> String;
    fn company(&self, rng: &mut dyn RngCore) -> String;

    /// Birth date between `max_age` years before `today` and `today`.
    fn date_of_birth(&self, rng: &mut dyn RngCore, today: NaiveDate, max_age: u32) -> NaiveDate {
        let span = i64::from(max_age) * 365;
        today - TimeDelta::days(rng.gen_range(0..=span))
    }

    /// Fills a pattern: `?` becomes an ASCII letter, `#` a digit.
    fn bothify(&self, rng: &mut dyn RngCore, pattern: &str) -> String {
        pattern
            .chars()
            .map(|ch| match ch {
                '?' => pick_char(rng, ASCII_LETTERS),
                '#' => pick_char(rng, DIGITS),
                other => other,
            })
            .collect()
    }
}

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

fn pick_char(rng: &mut dyn RngCore, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}

fn pick(rng: &mut dyn RngCore, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Carlos", "Maria", "Daniel", "Karen", "Wei", "Aisha", "Matthew", "Nancy", "Anthony", "Lisa",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Clark",
];

const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Sunset",
    "Ridge", "River", "Church", "Mill", "Spring", "Highland",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way"];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
];

const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const COMPANY_SUFFIXES: &[&str] = &["Group", "LLC", "Inc", "and Sons", "PLC", "Ltd"];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Built-in en-US style provider backed by static word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDemographics;

impl DemographicProvider for BuiltinDemographics {
    fn first_name(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, FIRST_NAMES)
    }

    fn last_name(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, LAST_NAMES)
    }

    fn street_address(&self, rng: &mut dyn RngCore) -> String {
        let number = rng.gen_range(1..10_000);
        let street = pick(rng, STREET_NAMES);
        let suffix = pick(rng, STREET_SUFFIXES);
        format!("{number} {street} {suffix}")
    }

    fn city(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, CITIES)
    }

    fn state_abbr(&self, rng: &mut dyn RngCore) -> String {
        pick(rng, STATE_ABBRS)
    }

    fn postcode(&self, rng: &mut dyn RngCore) -> String {
        self.bothify(rng, "#####")
    }

    fn phone_number(&self, rng: &mut dyn RngCore) -> String {
        let area = rng.gen_range(200..1000);
        let exchange = rng.gen_range(200..1000);
        let line = rng.gen_range(0..10_000);
        format!("({area}) {exchange}-{line:04}")
    }

    fn email(&self, rng: &mut dyn RngCore) -> String {
        let first = pick(rng, FIRST_NAMES).to_lowercase();
        let last = pick(rng, LAST_NAMES).to_lowercase();
        let domain = pick(rng, EMAIL_DOMAINS);
        format!("{first}.{last}@{domain}")
    }

    fn company(&self, rng: &mut dyn RngCore) -> String {
        let name = pick(rng, LAST_NAMES);
        let suffix = pick(rng, COMPANY_SUFFIXES);
        format!("{name} {suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn bothify_fills_letters_and_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let value = BuiltinDemographics.bothify(&mut rng, "??#####");
        assert_eq!(value.len(), 7);
        assert!(value[..2].chars().all(|c| c.is_ascii_alphabetic()));
        assert!(value[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn date_of_birth_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        for _ in 0..500 {
            let born = BuiltinDemographics.date_of_birth(&mut rng, today, 90);
            let days = (today - born).num_days();
            assert!((0..=90 * 365).contains(&days));
        }
    }
}

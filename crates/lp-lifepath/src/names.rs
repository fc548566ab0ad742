//! Name generation.

use rand::Rng;
use rand::rngs::StdRng;

use crate::pronoun::Sex;

/// Given names for male characters.
pub const MALE_NAMES: &[&str] = &[
    "Adam", "Bogdan", "Carlos", "Dmitri", "Emeka", "Felix", "Goro", "Hassan", "Ivan", "Jonah",
    "Kenji", "Luis", "Marcus", "Nikolai", "Omar", "Pavel", "Quentin", "Rafael", "Santiago",
    "Tomasz", "Uriel", "Victor", "Wei", "Xavier", "Yusuf", "Zoran",
];

/// Given names for female characters.
pub const FEMALE_NAMES: &[&str] = &[
    "Alina", "Beatriz", "Chiara", "Dana", "Elif", "Farah", "Grace", "Hana", "Ines", "Jun",
    "Katya", "Leila", "Maya", "Nadia", "Olga", "Priya", "Quinn", "Rosa", "Sakura", "Tamara",
    "Uma", "Vera", "Wren", "Ximena", "Yara", "Zofia",
];

/// Family names shared by both sexes.
pub const SURNAMES: &[&str] = &[
    "Alvarez", "Brandt", "Castillo", "Dubois", "Eriksen", "Fujimoto", "Garcia", "Haddad",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist", "Mbeki", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Silva", "Tanaka", "Usman", "Volkov", "Wojcik", "Xu", "Yilmaz", "Zhang",
];

/// Something that can invent a plausible name for a given sex.
pub trait NameService {
    /// Produce a full name.
    fn name(&self, sex: Sex, rng: &mut StdRng) -> String;
}

/// Built-in name service drawing from fixed given-name and surname lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockNames;

impl NameService for StockNames {
    fn name(&self, sex: Sex, rng: &mut StdRng) -> String {
        let given = match sex {
            Sex::Male => MALE_NAMES,
            Sex::Female => FEMALE_NAMES,
        };
        let first = given[rng.random_range(0..given.len())];
        let last = SURNAMES[rng.random_range(0..SURNAMES.len())];
        format!("{first} {last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn stock_names_follow_sex() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..30 {
            let name = StockNames.name(Sex::Female, &mut rng);
            let (first, last) = name.split_once(' ').unwrap();
            assert!(FEMALE_NAMES.contains(&first));
            assert!(SURNAMES.contains(&last));
        }
        let name = StockNames.name(Sex::Male, &mut rng);
        let first = name.split(' ').next().unwrap();
        assert!(MALE_NAMES.contains(&first));
    }

    #[test]
    fn stock_names_are_seeded() {
        let a = StockNames.name(Sex::Male, &mut StdRng::seed_from_u64(5));
        let b = StockNames.name(Sex::Male, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}

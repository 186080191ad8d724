//! Catalog of adoptable cats
//!
//! The catalog is fixed at compile time: eight cats, eight breeds, no
//! loading and no mutation. Everything that needs a cat borrows it as
//! `&'static Cat` from [`CATS`], so cart entries can never point outside
//! the catalog.

mod data;

use serde::Serialize;
use std::fmt;

pub use data::CATS;

/// Number of cats shown under "New Arrivals" on the home screen
pub const FEATURED_COUNT: usize = 4;

/// Breeds the shop deals in, in the order the breed selector shows them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Breed {
    #[serde(rename = "Siamese")]
    Siamese,
    #[serde(rename = "Persian")]
    Persian,
    #[serde(rename = "Maine Coon")]
    MaineCoon,
    #[serde(rename = "Bengal")]
    Bengal,
    #[serde(rename = "Sphynx")]
    Sphynx,
    #[serde(rename = "British Shorthair")]
    BritishShorthair,
    #[serde(rename = "Ragdoll")]
    Ragdoll,
    #[serde(rename = "Scottish Fold")]
    ScottishFold,
}

impl Breed {
    pub const ALL: [Breed; 8] = [
        Breed::Siamese,
        Breed::Persian,
        Breed::MaineCoon,
        Breed::Bengal,
        Breed::Sphynx,
        Breed::BritishShorthair,
        Breed::Ragdoll,
        Breed::ScottishFold,
    ];

    /// Display name, also the canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Breed::Siamese => "Siamese",
            Breed::Persian => "Persian",
            Breed::MaineCoon => "Maine Coon",
            Breed::Bengal => "Bengal",
            Breed::Sphynx => "Sphynx",
            Breed::BritishShorthair => "British Shorthair",
            Breed::Ragdoll => "Ragdoll",
            Breed::ScottishFold => "Scottish Fold",
        }
    }

    /// Parse a breed name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breed selector value: the "All" sentinel or one breed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreedFilter {
    #[default]
    All,
    Only(Breed),
}

impl BreedFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Parse "All" or a breed name
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(BreedFilter::All);
        }
        Breed::parse(s).map(BreedFilter::Only)
    }

    pub fn matches(&self, breed: Breed) -> bool {
        match self {
            BreedFilter::All => true,
            BreedFilter::Only(b) => *b == breed,
        }
    }

    /// Cycle through All -> each breed -> All
    pub fn next(self) -> Self {
        match self {
            BreedFilter::All => BreedFilter::Only(Breed::ALL[0]),
            BreedFilter::Only(b) => {
                let idx = Breed::ALL.iter().position(|x| *x == b).unwrap_or(0);
                Breed::ALL
                    .get(idx + 1)
                    .copied()
                    .map(BreedFilter::Only)
                    .unwrap_or(BreedFilter::All)
            }
        }
    }

    /// Cycle backwards through the same sequence as [`BreedFilter::next`]
    pub fn prev(self) -> Self {
        match self {
            BreedFilter::All => BreedFilter::Only(Breed::ALL[Breed::ALL.len() - 1]),
            BreedFilter::Only(b) => {
                let idx = Breed::ALL.iter().position(|x| *x == b).unwrap_or(0);
                match idx.checked_sub(1) {
                    Some(i) => BreedFilter::Only(Breed::ALL[i]),
                    None => BreedFilter::All,
                }
            }
        }
    }

    /// Label for the breed selector
    pub fn label(&self) -> &'static str {
        match self {
            BreedFilter::All => "All Breeds",
            BreedFilter::Only(b) => b.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// An adoptable cat
#[derive(Debug, PartialEq, Eq)]
pub struct Cat {
    pub id: &'static str,
    pub name: &'static str,
    pub breed: Breed,
    /// Age in months
    pub age: u32,
    /// Adoption fee in whole dollars
    pub price: u32,
    pub gender: Gender,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub personality: &'static str,
}

impl Cat {
    /// Case-insensitive substring match on name or description
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// All cats, in source order
pub fn all() -> &'static [Cat] {
    CATS
}

/// Breeds in selector order
pub fn breeds() -> &'static [Breed] {
    &Breed::ALL
}

/// Look up a cat by id
pub fn find(id: &str) -> Option<&'static Cat> {
    CATS.iter().find(|c| c.id == id)
}

/// First few cats, for the home screen
pub fn featured() -> &'static [Cat] {
    &CATS[..FEATURED_COUNT.min(CATS.len())]
}

/// Filter the static catalog by search text and breed
pub fn filter(query: &str, breed: BreedFilter) -> Vec<&'static Cat> {
    filter_cats(CATS, query, breed)
}

/// Filter an arbitrary slice of cats, preserving order
///
/// A cat matches when its name or description contains `query`
/// (case-insensitive) and `breed` accepts its breed.
pub fn filter_cats<'a>(cats: &'a [Cat], query: &str, breed: BreedFilter) -> Vec<&'a Cat> {
    cats.iter()
        .filter(|c| breed.matches(c.breed) && c.matches_query(query))
        .collect()
}

/// Subset of cat fields handed to the assistant as inventory context
#[derive(Debug, Serialize)]
struct InventoryItem {
    name: &'static str,
    breed: Breed,
    personality: &'static str,
    age: u32,
    price: u32,
    description: &'static str,
}

/// JSON array describing the inventory for the assistant's system instruction
pub fn inventory_json() -> String {
    let items: Vec<InventoryItem> = CATS
        .iter()
        .map(|c| InventoryItem {
            name: c.name,
            breed: c.breed,
            personality: c.personality,
            age: c.age,
            price: c.price,
            description: c.description,
        })
        .collect();

    // Plain structs of strings and integers always serialize
    serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(cats: &[&Cat]) -> Vec<&'static str> {
        cats.iter().map(|c| c.id).collect()
    }

    #[test]
    fn catalog_ids_are_unique() {
        let set: HashSet<_> = CATS.iter().map(|c| c.id).collect();
        assert_eq!(set.len(), CATS.len());
    }

    #[test]
    fn every_cat_has_a_listed_breed() {
        assert!(CATS.iter().all(|c| breeds().contains(&c.breed)));
    }

    #[test]
    fn prices_are_positive() {
        assert!(CATS.iter().all(|c| c.price > 0));
    }

    #[test]
    fn luna_query_finds_only_luna() {
        let result = filter("Luna", BreedFilter::All);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Luna");
    }

    #[test]
    fn query_is_case_insensitive_and_searches_description() {
        assert_eq!(ids(&filter("luna", BreedFilter::All)), vec!["c1"]);
        // "leash" only appears in Simba's description
        assert_eq!(ids(&filter("LEASH", BreedFilter::All)), vec!["c2"]);
    }

    #[test]
    fn sphynx_filter_returns_sphynx_cats() {
        let result = filter("", BreedFilter::Only(Breed::Sphynx));
        let expected: Vec<_> = CATS
            .iter()
            .filter(|c| c.breed == Breed::Sphynx)
            .map(|c| c.id)
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn empty_query_and_all_returns_catalog_in_order() {
        let result = filter("", BreedFilter::All);
        let expected: Vec<_> = CATS.iter().map(|c| c.id).collect();
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(filter("dragon", BreedFilter::All).is_empty());
        assert!(filter("Luna", BreedFilter::Only(Breed::Persian)).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        for breed in std::iter::once(BreedFilter::All).chain(Breed::ALL.map(BreedFilter::Only)) {
            for query in ["", "a", "quiet", "Luna", "zzz"] {
                let once: Vec<&Cat> = filter(query, breed);
                let owned: Vec<&Cat> = once.clone();
                let twice: Vec<&Cat> = owned
                    .into_iter()
                    .filter(|c| breed.matches(c.breed) && c.matches_query(query))
                    .collect();
                assert_eq!(ids(&once), ids(&twice));
            }
        }
    }

    #[test]
    fn breed_and_text_predicates_commute() {
        for breed in std::iter::once(BreedFilter::All).chain(Breed::ALL.map(BreedFilter::Only)) {
            for query in ["", "e", "fluffy", "gentle", "Oreo"] {
                let breed_first: Vec<&Cat> = filter_cats(CATS, "", breed)
                    .into_iter()
                    .filter(|c| c.matches_query(query))
                    .collect();
                let text_first: Vec<&Cat> = filter_cats(CATS, query, BreedFilter::All)
                    .into_iter()
                    .filter(|c| breed.matches(c.breed))
                    .collect();
                assert_eq!(ids(&breed_first), ids(&text_first));
                assert_eq!(ids(&breed_first), ids(&filter(query, breed)));
            }
        }
    }

    #[test]
    fn breed_filter_parse() {
        assert_eq!(BreedFilter::parse("All"), Some(BreedFilter::All));
        assert_eq!(
            BreedFilter::parse("maine coon"),
            Some(BreedFilter::Only(Breed::MaineCoon))
        );
        assert_eq!(BreedFilter::parse("Tabby"), None);
    }

    #[test]
    fn breed_filter_cycles_through_every_breed() {
        let mut f = BreedFilter::All;
        let mut seen = Vec::new();
        loop {
            f = f.next();
            if f == BreedFilter::All {
                break;
            }
            seen.push(f);
        }
        assert_eq!(seen.len(), Breed::ALL.len());
        assert_eq!(BreedFilter::All.prev().next(), BreedFilter::All);
        assert_eq!(
            BreedFilter::Only(Breed::Siamese).prev(),
            BreedFilter::All
        );
    }

    #[test]
    fn featured_is_first_four() {
        let featured: Vec<_> = featured().iter().map(|c| c.id).collect();
        assert_eq!(featured, vec!["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn inventory_json_lists_every_cat() {
        let json: serde_json::Value = serde_json::from_str(&inventory_json()).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), CATS.len());
        assert_eq!(arr[1]["breed"], "Maine Coon");
        assert_eq!(arr[0]["name"], "Luna");
        assert!(arr[0].get("image").is_none());
    }
}

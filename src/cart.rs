// Cart store - cats a signed-in visitor intends to adopt
//
// In-memory only: the cart is gone when the program exits. Entries borrow
// cats from the static catalog, and a cat id appears at most once.

use crate::catalog::Cat;
use chrono::{DateTime, Utc};

/// A cat in the cart and when it was added
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub cat: &'static Cat,
    pub added_at: DateTime<Utc>,
}

/// Result of an adoption attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Already in the cart, nothing changed
    AlreadyInCart,
    /// No session; caller should prompt for sign-in
    AuthRequired,
}

#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cat for adoption
    pub fn add(&mut self, cat: &'static Cat, signed_in: bool) -> AddOutcome {
        if !signed_in {
            return AddOutcome::AuthRequired;
        }
        if self.contains(cat.id) {
            return AddOutcome::AlreadyInCart;
        }

        self.entries.push(CartEntry {
            cat,
            added_at: Utc::now(),
        });
        tracing::debug!("Cart: added {} ({} entries)", cat.name, self.entries.len());
        AddOutcome::Added
    }

    /// Remove a cat by id. Returns true if an entry was removed.
    pub fn remove(&mut self, cat_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.cat.id != cat_id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!("Cart: removed {} ({} entries)", cat_id, self.entries.len());
        }
        removed
    }

    pub fn contains(&self, cat_id: &str) -> bool {
        self.entries.iter().any(|e| e.cat.id == cat_id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of adoption fees
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.cat.price).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CATS};
    use std::collections::{BTreeSet, HashSet};

    fn cat(id: &str) -> &'static Cat {
        catalog::find(id).unwrap()
    }

    #[test]
    fn unauthenticated_add_never_mutates() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(cat("c1"), false), AddOutcome::AuthRequired);
        assert!(cart.is_empty());
    }

    #[test]
    fn duplicate_add_is_idempotent() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(cat("c1"), true), AddOutcome::Added);
        let first_added = cart.entries()[0].added_at;

        assert_eq!(cart.add(cat("c1"), true), AddOutcome::AlreadyInCart);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.entries()[0].added_at, first_added);
        assert_eq!(cart.total(), 350);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(cat("c2"), true);
        assert!(!cart.remove("c9"));
        assert_eq!(cart.count(), 1);
        assert!(cart.remove("c2"));
        assert!(cart.is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut cart = Cart::new();
        for id in ["c3", "c1", "c2"] {
            cart.add(cat(id), true);
        }
        let ids: Vec<_> = cart.entries().iter().map(|e| e.cat.id).collect();
        assert_eq!(ids, vec!["c3", "c1", "c2"]);
    }

    /// Deterministic pseudo-random op sequences: (add?, cat index)
    fn op_sequences() -> Vec<Vec<(bool, usize)>> {
        let mut seed: u64 = 0x5eed_cafe;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };
        (0..50)
            .map(|_| {
                (0..40)
                    .map(|_| {
                        let r = next();
                        (r % 3 != 0, (r >> 8) as usize % CATS.len())
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn add_remove_sequences_hold_invariants() {
        for ops in op_sequences() {
            let mut cart = Cart::new();
            let mut model: BTreeSet<&str> = BTreeSet::new();

            for (is_add, idx) in ops {
                let c = &CATS[idx];
                if is_add {
                    cart.add(c, true);
                    model.insert(c.id);
                } else {
                    cart.remove(c.id);
                    model.remove(c.id);
                }

                let ids: Vec<&str> = cart.entries().iter().map(|e| e.cat.id).collect();
                let unique: HashSet<&str> = ids.iter().copied().collect();
                assert_eq!(unique.len(), ids.len(), "duplicate cat ids in cart");
                assert_eq!(ids.iter().copied().collect::<BTreeSet<_>>(), model);

                let expected_total: u32 = ids
                    .iter()
                    .map(|id| catalog::find(id).unwrap().price)
                    .sum();
                assert_eq!(cart.total(), expected_total);
                assert_eq!(cart.count(), model.len());
            }
        }
    }

    #[test]
    fn entries_only_reference_catalog_cats() {
        let mut cart = Cart::new();
        for c in CATS {
            cart.add(c, true);
        }
        for entry in cart.entries() {
            assert!(catalog::find(entry.cat.id).is_some());
        }
    }
}

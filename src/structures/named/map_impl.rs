//! Implementations of the ternary valuation trait for maps from strings to ternary values.
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use crate::structures::{named::TernaryValuation, ternary::Ternary};

impl TernaryValuation for BTreeMap<String, Ternary> {
    fn value_of(&self, term: &str) -> Option<Ternary> {
        self.get(term).copied()
    }

    fn contains_term(&self, term: &str) -> bool {
        self.contains_key(term)
    }

    fn term_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(|term| term.as_str())
    }

    fn term_value_pairs(&self) -> impl Iterator<Item = (&str, Ternary)> {
        self.iter().map(|(term, value)| (term.as_str(), *value))
    }

    fn term_count(&self) -> usize {
        self.len()
    }

    fn canonical(&self) -> BTreeMap<String, Ternary> {
        self.clone()
    }
}

impl<S: BuildHasher> TernaryValuation for HashMap<String, Ternary, S> {
    fn value_of(&self, term: &str) -> Option<Ternary> {
        self.get(term).copied()
    }

    fn contains_term(&self, term: &str) -> bool {
        self.contains_key(term)
    }

    fn term_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(|term| term.as_str())
    }

    fn term_value_pairs(&self) -> impl Iterator<Item = (&str, Ternary)> {
        self.iter().map(|(term, value)| (term.as_str(), *value))
    }

    fn term_count(&self) -> usize {
        self.len()
    }
}

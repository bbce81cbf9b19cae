/*!
Conjunctions, aka. a collection of named terms each paired with a required ternary value, interpreted as the conjunction of those requirements.

A conjunction is satisfied on a state exactly when every term of the conjunction has its required value on the state.
Terms of the state which the conjunction does not depend on are ignored.

```rust
# use esle::structures::conjunction::Conjunction;
# use esle::structures::named::NamedTernaries;
# use esle::structures::ternary::Ternary;
let conjunction = Conjunction::from_iter([("AFOO", Ternary::Unknown)]);

let unknown = NamedTernaries::from([("AFOO".to_string(), Ternary::Unknown)]);
let falsum = NamedTernaries::from([("AFOO".to_string(), Ternary::False)]);

assert_eq!(conjunction.sat(&unknown), Ok(true));
assert_eq!(conjunction.sat(&falsum), Ok(false));
```

- The empty conjunction is always satisfied, on any state (including the empty state).
- Conditions are always copied, on construction, assignment, and retrieval.
  So, a conjunction never shares a mapping with a caller.

# Missing terms

A state is expected to contain every term a conjunction depends on.
If some term is missing [sat](Conjunction::sat) returns an error rather than `false`, as the state and the conjunction are out of sync.
Terms are checked in term order, and `false` is returned at the first term without its required value.
So, a missing term which follows some such term in term order is not noticed.

Likewise, [required_state](Conjunction::required_state) returns an error for a term the conjunction does not depend on, as distinct from requiring the term to be unknown.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        named::{NamedTernaries, TernaryValuation},
        ternary::Ternary,
    },
    types::err::{self},
};

/// A conjunction of requirements on the values of named terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conjunction {
    /// The required value of each term the conjunction depends on.
    conditions: NamedTernaries,
}

impl Conjunction {
    /// A conjunction without conditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A conjunction with a copy of the given conditions.
    pub fn from_conditions(conditions: &impl TernaryValuation) -> Self {
        let mut conjunction = Self::default();
        conjunction.assign_conditions(conditions);
        conjunction
    }

    /// Adds to the conditions of the conjunction.
    ///
    /// Any existing condition on a term of the given conditions is replaced, and all other existing conditions are kept.
    pub fn assign_conditions(&mut self, conditions: &impl TernaryValuation) {
        for (term, value) in conditions.term_value_pairs() {
            self.conditions.insert(term.to_string(), value);
        }
    }

    /// A copy of the conditions of the conjunction.
    pub fn get_conditions(&self) -> NamedTernaries {
        self.conditions.clone()
    }

    /// An iterator over (term, required value) pairs, in term order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, Ternary)> {
        self.conditions
            .iter()
            .map(|(term, value)| (term.as_str(), *value))
    }

    /// An iterator over the terms the conjunction depends on, in term order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(|term| term.as_str())
    }

    /// Whether the conjunction is satisfied on the given states.
    ///
    /// Returns an error if some term of the conjunction, checked before any term without its required value, is not in the states.
    pub fn sat(&self, states: &impl TernaryValuation) -> Result<bool, err::ErrorKind> {
        for (term, required) in &self.conditions {
            match states.value_of(term) {
                None => {
                    log::trace!(target: targets::CONJUNCTION, "'{term}' missing from states.");
                    return Err(err::ConjunctionError::MissingTerm(term.clone()).into());
                }

                Some(observed) if observed != *required => {
                    log::trace!(target: targets::CONJUNCTION, "'{term}' is {observed}, required {required}.");
                    return Ok(false);
                }

                Some(_) => {}
            }
        }

        Ok(true)
    }

    /// Whether the conjunction has a condition on exactly the named term.
    pub fn depends_on(&self, term: &str) -> bool {
        self.conditions.contains_key(term)
    }

    /// The value required of the named term.
    ///
    /// Returns an error if the conjunction does not depend on the term.
    pub fn required_state(&self, term: &str) -> Result<Ternary, err::ErrorKind> {
        match self.conditions.get(term) {
            Some(value) => Ok(*value),
            None => Err(err::ConjunctionError::MissingTerm(term.to_string()).into()),
        }
    }

    /// A count of the terms the conjunction depends on.
    pub fn arity(&self) -> usize {
        self.conditions.len()
    }
}

impl FromIterator<(String, Ternary)> for Conjunction {
    fn from_iter<I: IntoIterator<Item = (String, Ternary)>>(iter: I) -> Self {
        let mut conjunction = Self::default();
        conjunction.extend(iter);
        conjunction
    }
}

impl<'a> FromIterator<(&'a str, Ternary)> for Conjunction {
    fn from_iter<I: IntoIterator<Item = (&'a str, Ternary)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(term, value)| (term.to_string(), value))
            .collect()
    }
}

/// Extension follows [assign_conditions](Conjunction::assign_conditions), with the last value given for a term kept.
impl Extend<(String, Ternary)> for Conjunction {
    fn extend<I: IntoIterator<Item = (String, Ternary)>>(&mut self, iter: I) {
        for (term, value) in iter {
            self.conditions.insert(term, value);
        }
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "⊤");
        }

        for (index, (term, value)) in self.conditions.iter().enumerate() {
            if index > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{term}={value}")?;
        }

        Ok(())
    }
}

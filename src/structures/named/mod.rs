/*!
Mappings from the names of terms to [ternary](crate::structures::ternary) values.

A mapping from names to values is used both as the current state of (every term in) a network and as the conditions of a [conjunction](crate::structures::conjunction).

The canonical representation of such a mapping is an ordered map from strings to ternary values, [NamedTernaries].
Order is irrelevant to the meaning of a mapping, though an ordered map keeps iteration, and so seeded random generation, reproducible.

Read access to a state is through the [TernaryValuation] trait, which is implemented for both ordered and hashed maps from strings to ternary values.

```rust
# use esle::structures::named::{NamedTernaries, TernaryValuation};
# use esle::structures::ternary::Ternary;
# use std::collections::HashMap;
let ordered = NamedTernaries::from([("p".to_string(), Ternary::Unknown)]);
let hashed = HashMap::from([("p".to_string(), Ternary::Unknown)]);

assert_eq!(ordered.value_of("p"), Some(Ternary::Unknown));
assert_eq!(hashed.value_of("p"), Some(Ternary::Unknown));

assert_eq!(ordered.value_of("q"), None);
assert!(!hashed.contains_term("q"));
```

Note, `None` from [value_of](TernaryValuation::value_of) indicates the term is not present, and is distinct from the term being present with an unknown value.
*/

mod map_impl;

use std::collections::BTreeMap;

use super::ternary::Ternary;

/// The canonical representation of a mapping from names to ternary values.
pub type NamedTernaries = BTreeMap<String, Ternary>;

/// Something which stores the ternary value of some collection of named terms.
pub trait TernaryValuation {
    /// The value of the named term, if the term is present.
    fn value_of(&self, term: &str) -> Option<Ternary>;

    /// Whether the named term is present.
    fn contains_term(&self, term: &str) -> bool {
        self.value_of(term).is_some()
    }

    /// An iterator over the names of all terms, order is not guaranteed.
    fn term_names(&self) -> impl Iterator<Item = &str>;

    /// An iterator over all (name, value) pairs, order is not guaranteed.
    fn term_value_pairs(&self) -> impl Iterator<Item = (&str, Ternary)>;

    /// A count of all terms.
    fn term_count(&self) -> usize;

    /// The canonical representation of the mapping, as an owned copy.
    fn canonical(&self) -> NamedTernaries {
        self.term_value_pairs()
            .map(|(term, value)| (term.to_string(), value))
            .collect()
    }
}

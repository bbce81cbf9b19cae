/*!
Random generation of conjunctions.

# Overview

A random conjunction is drawn from a state in three steps:
- The terms eligible for the conjunction are the terms of the state, less any terms to exclude.
- A count of terms is chosen uniformly from some range of counts.
- That many (distinct) terms are chosen uniformly from the eligible terms, and each is required to have its current value.
  Eligible terms are kept paired with their values, so no term is looked up twice.

```rust,ignore
let pool = states.term_value_pairs().filter(|(term, _)| !exclude.contains(term)).collect::<Vec<_>>();
let count = rng.random_range(min..=max).min(pool.len());
let chosen = rand::seq::index::sample(rng, pool.len(), count);
```

As each term is required to have its value on the state, a generated conjunction is always satisfied on the state it was drawn from.

# Edge cases

- If there are fewer eligible terms than the chosen count, every eligible term is used.
  So, the arity of a generated conjunction is at most the count of eligible terms.
- If there are no eligible terms no conjunction is generated, and `Ok(None)` is returned.
  This is not an error, as whether a state has eligible terms is not (typically) up to the caller.
- A minimum count of zero, or a maximum count less than the minimum count, is an error.
  Bounds are checked before the eligible terms, so misuse is noted even if no conjunction could be generated.

# Randomness

The source of randomness is always supplied.
Eligible terms are sorted by name before sampling, so the same source (with the same seed) and the same state generate the same conjunction, regardless of the order in which the state iterates over its terms.
*/

use std::collections::BTreeSet;

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{conjunction::Conjunction, named::TernaryValuation},
    types::err::{self},
};

/// A count chosen uniformly from the closed range `[min, max]`.
pub fn sample_count<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> usize {
    rng.random_range(min..=max)
}

/// Distinct elements of the pool, chosen uniformly without replacement.
///
/// If the pool has fewer than `amount` elements, every element of the pool is chosen (in some random order).
pub fn sample_distinct<'p, T, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &'p [T],
    amount: usize,
) -> Vec<&'p T> {
    let amount = std::cmp::min(amount, pool.len());

    rand::seq::index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|index| &pool[index])
        .collect()
}

/// Checks the bounds on a count of terms, returning the (closed) range of counts.
pub fn term_bounds(
    num_terms_min: usize,
    num_terms_max: Option<usize>,
) -> Result<(usize, usize), err::ErrorKind> {
    if num_terms_min == 0 {
        return Err(err::GenerationError::InvalidMinimum(num_terms_min).into());
    }

    match num_terms_max {
        None => Ok((num_terms_min, num_terms_min)),

        Some(max) if max < num_terms_min => Err(err::GenerationError::InvalidMaximum {
            min: num_terms_min,
            max,
        }
        .into()),

        Some(max) => Ok((num_terms_min, max)),
    }
}

impl Conjunction {
    /// A random conjunction satisfied on the given states, or `None` if every term of the states is excluded.
    ///
    /// - `num_terms_min` is the least count of terms to draw, and must be positive.
    /// - `num_terms_max` is the greatest count of terms to draw, and defaults to `num_terms_min`.
    /// - `names_to_exclude` are terms which may not be drawn.
    ///
    /// Returns an error if the bounds are invalid.
    ///
    /// ```rust
    /// # use esle::generic::random::MinimalPCG32;
    /// # use esle::structures::conjunction::Conjunction;
    /// # use esle::structures::named::NamedTernaries;
    /// # use esle::structures::ternary::Ternary;
    /// # use rand::SeedableRng;
    /// let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
    ///
    /// let states = NamedTernaries::from([
    ///     ("A".to_string(), Ternary::True),
    ///     ("B".to_string(), Ternary::Unknown),
    /// ]);
    ///
    /// let conjunction = Conjunction::generate_random(&states, 1, None, &["A"], &mut rng);
    /// let conjunction = conjunction.unwrap().unwrap();
    ///
    /// assert_eq!(conjunction.arity(), 1);
    /// assert_eq!(conjunction.required_state("B"), Ok(Ternary::Unknown));
    ///
    /// let everything_excluded = Conjunction::generate_random(&states, 1, None, &["A", "B"], &mut rng);
    /// assert_eq!(everything_excluded, Ok(None));
    /// ```
    pub fn generate_random<R: Rng + ?Sized>(
        states: &impl TernaryValuation,
        num_terms_min: usize,
        num_terms_max: Option<usize>,
        names_to_exclude: &[&str],
        rng: &mut R,
    ) -> Result<Option<Conjunction>, err::ErrorKind> {
        let (min, max) = term_bounds(num_terms_min, num_terms_max)?;

        let excluded = names_to_exclude.iter().copied().collect::<BTreeSet<_>>();

        let mut pool = states
            .term_value_pairs()
            .filter(|(term, _)| !excluded.contains(term))
            .collect::<Vec<_>>();

        if pool.is_empty() {
            log::debug!(target: targets::GENERATION, "No eligible terms from {} terms.", states.term_count());
            return Ok(None);
        }

        pool.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        let count = sample_count(rng, min, max);

        let conjunction = sample_distinct(rng, &pool, count)
            .into_iter()
            .map(|(term, value)| (term.to_string(), *value))
            .collect::<Conjunction>();

        log::debug!(target: targets::GENERATION, "Generated {conjunction} (count {count} from {}).", pool.len());

        Ok(Some(conjunction))
    }
}

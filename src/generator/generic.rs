use crate::{
    config::Config,
    generator::Counters,
    misc::log::targets::{self},
    structures::{conjunction::Conjunction, named::TernaryValuation},
    types::err::{self},
};

/// A generic generator, parameterised to a source of randomness.
pub struct GenericGenerator<R: rand::Rng> {
    /// The configuration of the generator.
    pub(super) config: Config,

    /// Counts of generation outcomes.
    pub(super) counters: Counters,

    /// The source of randomness.
    pub(super) rng: R,
}

impl<R: rand::Rng> GenericGenerator<R> {
    /// A generator with the given config and source of randomness.
    ///
    /// The seed of the config is ignored, as the source of randomness is given.
    pub fn from_parts(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            rng,
        }
    }

    /// The configuration of the generator.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counts of generation outcomes.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// A random conjunction satisfied on the given states, using the configured bounds on the count of terms.
    ///
    /// See [generate_random](Conjunction::generate_random).
    pub fn generate(
        &mut self,
        states: &impl TernaryValuation,
        names_to_exclude: &[&str],
    ) -> Result<Option<Conjunction>, err::ErrorKind> {
        let result = Conjunction::generate_random(
            states,
            self.config.terms_min.value,
            Some(self.config.terms_max.value),
            names_to_exclude,
            &mut self.rng,
        )?;

        match result {
            Some(_) => self.counters.generated += 1,
            None => self.counters.exhausted += 1,
        }

        Ok(result)
    }

    /// Up to `count` random conjunctions satisfied on the given states.
    ///
    /// If no term is eligible no conjunction is generated, and the returned vector is empty.
    pub fn generate_many(
        &mut self,
        states: &impl TernaryValuation,
        names_to_exclude: &[&str],
        count: usize,
    ) -> Result<Vec<Conjunction>, err::ErrorKind> {
        let mut conjunctions = Vec::with_capacity(count);

        for _ in 0..count {
            match self.generate(states, names_to_exclude)? {
                Some(conjunction) => conjunctions.push(conjunction),

                None => {
                    log::debug!(target: targets::GENERATION, "Stopped after {} of {count}.", conjunctions.len());
                    break;
                }
            }
        }

        Ok(conjunctions)
    }
}

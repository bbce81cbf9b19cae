//! Ternary-valued conjunctions, for use in the update rules of random Boolean networks.
//!
//! esle is a library for building the conditions of a ternary random Boolean network.
//! Each node in such a network takes one of three values --- true, false, or unknown --- and the value of a node at the next step is determined by a rule over the current values of its inputs.
//! Rules are (intended to be) written as disjunctions of [conjunctions](structures::conjunction), and the conjunction is the primitive provided here.
//!
//! Some guiding principles:
//! - Unknown is a value, not an absence.
//!   A conjunction may require a term to be unknown, and an unknown term never satisfies a requirement of true or false (or the other way around).
//! - Asking about a term the network does not contain is a mistake, not a false result, and so returns an [error](types::err).
//! - Randomness is always supplied, never ambient.
//!   Random generation takes a source of randomness as an argument, and a [generator] owns one seeded from a [config](config::Config).
//!
//! # Orientation
//!
//! - The [structures] module contains the [ternary value](structures::ternary), [mappings from names to ternaries](structures::named), and [conjunctions](structures::conjunction).
//! - The [procedures] module contains random generation of conjunctions.
//! - The [generator] module bundles configuration and a source of randomness for repeated generation.
//!
//! # Examples
//!
//! + Check a conjunction against the state of a network.
//!
//! ```rust
//! # use esle::structures::conjunction::Conjunction;
//! # use esle::structures::named::NamedTernaries;
//! # use esle::structures::ternary::Ternary;
//! let conjunction = Conjunction::from_iter([
//!     ("AFOO", Ternary::Unknown),
//!     ("ABAR", Ternary::True),
//!     ("AQUUX", Ternary::False),
//! ]);
//!
//! let mut states = NamedTernaries::new();
//! states.insert("AFOO".to_string(), Ternary::Unknown);
//! states.insert("ABAR".to_string(), Ternary::True);
//! states.insert("AQUUX".to_string(), Ternary::False);
//! states.insert("AZIFF".to_string(), Ternary::True);
//!
//! assert_eq!(conjunction.sat(&states), Ok(true));
//!
//! states.insert("AFOO".to_string(), Ternary::False);
//! assert_eq!(conjunction.sat(&states), Ok(false));
//! ```
//!
//! + Generate a random conjunction satisfied by the current state.
//!
//! ```rust
//! # use esle::config::Config;
//! # use esle::generator::Generator;
//! # use esle::structures::named::NamedTernaries;
//! # use esle::structures::ternary::Ternary;
//! let states = NamedTernaries::from([
//!     ("A".to_string(), Ternary::True),
//!     ("B".to_string(), Ternary::False),
//!     ("C".to_string(), Ternary::Unknown),
//! ]);
//!
//! let mut config = Config::default();
//! config.terms_min.value = 1;
//! config.terms_max.value = 2;
//!
//! let mut generator = Generator::from_config(config);
//! let conjunction = generator.generate(&states, &[]).unwrap().unwrap();
//!
//! assert!((1..=2).contains(&conjunction.arity()));
//! assert_eq!(conjunction.sat(&states), Ok(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No log implementation is provided, though with [env_logger](https://docs.rs/env_logger/latest/env_logger/) generation can be inspected with `RUST_LOG=generation …`.

pub mod config;
pub mod generator;
pub mod procedures;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;

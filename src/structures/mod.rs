//! Key structures: ternary values, mappings from names to ternary values, and conjunctions.
//!
//! # Other structures without an implementation.
//!
//! ## Networks
//!
//! A network is a collection of named terms, each of which has some [ternary](ternary) value at each step of a simulation.
//! The library does not implement networks.
//! Instead, a network is seen only through its current state, given as a [mapping from names to values](named), and it is the responsibility of whatever maintains the network to ensure the state given contains every term of interest.
//!
//! ## Rules
//!
//! The rule of a node is (intended to be) a disjunction of [conjunctions](conjunction), with the node taking some value when any conjunction is satisfied.
//! How conjunctions are combined is left to whatever maintains the network.

pub mod conjunction;
pub mod named;
pub mod ternary;

//! Procedures over structures.
//!
//! At present, the only procedure is the [random generation](generate) of conjunctions.

pub mod generate;

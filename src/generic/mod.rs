//! Generic structures, not specific to conjunctions.

pub mod random;

//! Types shared throughout the library.

pub mod err;

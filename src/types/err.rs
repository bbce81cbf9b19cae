//! Error types used in the library.
//!
//! - Every error is the result of some misuse by a caller, e.g. asking whether a conjunction is satisfied on a state which does not contain some term of the conjunction.
//! - Some outcomes which may look like errors are not.
//!   In particular, random generation from a state whose terms have all been excluded is expected, and returns `Ok(None)`.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Conjunction(ConjunctionError),
    Generation(GenerationError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(ConfigError::OutOfBounds(name)) => {
                write!(f, "Value for '{name}' is out of bounds.")
            }

            Self::Conjunction(ConjunctionError::MissingTerm(term)) => {
                write!(f, "'{term}' not in network.")
            }

            Self::Generation(GenerationError::InvalidMinimum(min)) => {
                write!(f, "Minimum term count must be positive, got {min}.")
            }

            Self::Generation(GenerationError::InvalidMaximum { min, max }) => {
                write!(f, "Maximum term count {max} is less than minimum {min}.")
            }

            Self::Parse(ParseError::Ternary(string)) => {
                write!(f, "'{string}' is not a ternary value.")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when configuring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// An attempt to set the named option to a value outside of its bounds.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when reading or evaluating a conjunction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConjunctionError {
    /// A term is required but not present.
    ///
    /// Either a state is missing some term of a conjunction, or a conjunction was asked about a term it does not depend on.
    MissingTerm(String),
}

impl From<ConjunctionError> for ErrorKind {
    fn from(e: ConjunctionError) -> Self {
        ErrorKind::Conjunction(e)
    }
}

/// Errors in the bounds given for random generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerationError {
    /// The minimum count of terms was not positive.
    InvalidMinimum(usize),

    /// The maximum count of terms was less than the minimum.
    InvalidMaximum { min: usize, max: usize },
}

impl From<GenerationError> for ErrorKind {
    fn from(e: GenerationError) -> Self {
        ErrorKind::Generation(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The string does not name a ternary value.
    Ternary(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

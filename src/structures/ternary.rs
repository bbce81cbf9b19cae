/*!
Ternary values --- true, false, or unknown.

Ternary values permit the terms of a network to be seeded with an initial unknown value.
Conventional (binary) random Boolean networks are sensitive to a random initial state, and seeding with unknown sidesteps this.

Unknown is a value in its own right, and is distinct from both true and false:

```rust
# use esle::structures::ternary::Ternary;
assert_ne!(Ternary::Unknown, Ternary::False);
assert_ne!(Ternary::Unknown, Ternary::True);

assert_eq!(Ternary::from(None), Ternary::Unknown);
assert_eq!(Ternary::Unknown.as_option(), None);
```

There is no conversion from a ternary value to a boolean, and comparison is always between ternary values.

# Order

Ternary values are ordered `False < True < Unknown`, so they may be used as keys of ordered collections.
The order has no logical significance.
*/

use crate::types::err::{self};

/// A ternary value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ternary {
    False,
    True,
    Unknown,
}

impl Ternary {
    /// All ternary values.
    pub const ALL: [Ternary; 3] = [Ternary::False, Ternary::True, Ternary::Unknown];

    /// The (Kleene) negation of the value, with unknown negating to unknown.
    pub fn negate(self) -> Self {
        match self {
            Self::False => Self::True,
            Self::True => Self::False,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Whether the value is true or false.
    pub fn is_known(self) -> bool {
        match self {
            Self::False | Self::True => true,
            Self::Unknown => false,
        }
    }

    /// The value as an optional boolean, with unknown as `None`.
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::False => Some(false),
            Self::True => Some(true),
            Self::Unknown => None,
        }
    }
}

impl From<bool> for Ternary {
    fn from(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl From<Option<bool>> for Ternary {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(b) => Self::from(b),
            None => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Ternary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::False => write!(f, "false"),
            Self::True => write!(f, "true"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Ternary {
    type Err = err::ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Self::True),
            "false" | "0" => Ok(Self::False),
            "unknown" | "?" => Ok(Self::Unknown),
            _ => Err(err::ParseError::Ternary(s.to_string()).into()),
        }
    }
}

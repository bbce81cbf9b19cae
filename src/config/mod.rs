/*!
Configuration of a [generator](crate::generator).

All configuration of a generator is contained within a [Config], and each option is a [ConfigOption] with a name and bounds.

Bounds on a single option are checked when the option is [set](ConfigOption::set).
Relations between options, such as the minimum count of terms not exceeding the maximum count, are checked when a conjunction is generated.

```rust
# use esle::config::Config;
let mut config = Config::default();

assert!(config.terms_max.set(4).is_ok());
assert!(config.terms_min.set(0).is_err());
assert_eq!(config.terms_min.value, 1);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation of a seed for a source of randomness.
pub type Seed = u64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The least count of terms in a generated conjunction.
    pub terms_min: ConfigOption<usize>,

    /// The greatest count of terms in a generated conjunction.
    pub terms_max: ConfigOption<usize>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<Seed>,
}

impl Default for Config {
    /// The default config generates conjunctions of a single term, deterministically.
    fn default() -> Self {
        Config {
            terms_min: ConfigOption {
                name: "terms_min",
                min: 1,
                max: usize::MAX,
                value: 1,
            },

            terms_max: ConfigOption {
                name: "terms_max",
                min: 1,
                max: usize::MAX,
                value: 1,
            },

            seed: ConfigOption {
                name: "seed",
                min: Seed::MIN,
                max: Seed::MAX,
                value: 0,
            },
        }
    }
}

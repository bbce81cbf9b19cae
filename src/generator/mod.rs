/*!
The generator --- which holds a configuration and a source of randomness, and from which random conjunctions are drawn.

Strictly, a [GenericGenerator] and a [Generator].

The generic generator is generic over the source of randomness.
A [Generator] fixes the source of randomness to [MinimalPCG32](crate::generic::random::MinimalPCG32), and [from_config](Generator::from_config) is implemented for a generator rather than a generic generator to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use esle::config::Config;
# use esle::generator::Generator;
# use esle::structures::named::NamedTernaries;
# use esle::structures::ternary::Ternary;
let states = NamedTernaries::from([
    ("A".to_string(), Ternary::True),
    ("B".to_string(), Ternary::False),
    ("C".to_string(), Ternary::Unknown),
    ("D".to_string(), Ternary::True),
]);

let mut config = Config::default();
config.terms_max.value = 3;

let mut generator = Generator::from_config(config);
let conjunctions = generator.generate_many(&states, &["D"], 8).unwrap();

assert_eq!(conjunctions.len(), 8);
for conjunction in &conjunctions {
    assert!(!conjunction.depends_on("D"));
    assert_eq!(conjunction.sat(&states), Ok(true));
}

assert_eq!(generator.counters().generated, 8);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericGenerator;
mod specific;
pub use specific::Generator;

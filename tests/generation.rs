use esle::{
    config::Config,
    generator::{Generator, GenericGenerator},
    generic::random::MinimalPCG32,
    structures::{conjunction::Conjunction, named::NamedTernaries, ternary::Ternary},
    types::err::{self},
};
use rand::SeedableRng;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rng(seed: u64) -> MinimalPCG32 {
    MinimalPCG32::from_seed(seed.to_le_bytes())
}

fn six_states() -> NamedTernaries {
    [
        ("A", Ternary::True),
        ("B", Ternary::True),
        ("C", Ternary::False),
        ("D", Ternary::True),
        ("E", Ternary::True),
        ("F", Ternary::False),
    ]
    .iter()
    .map(|(term, value)| (term.to_string(), *value))
    .collect()
}

mod random {
    use super::*;

    #[test]
    fn hundred_in_range() {
        init_logs();
        let states = six_states();
        let mut rng = rng(0);

        let mut seen = [0_usize; 6];

        for _ in 0..100 {
            let c = Conjunction::generate_random(&states, 2, Some(5), &[], &mut rng)
                .expect("Valid bounds")
                .expect("Eligible terms");

            assert!((2..=5).contains(&c.arity()));
            assert_eq!(c.sat(&states), Ok(true));
            seen[c.arity()] += 1;
        }

        for arity in 2..=5 {
            assert!(seen[arity] > 0, "Arity {arity} never generated");
        }
    }

    #[test]
    fn arity_uniform() {
        let states = six_states();
        let mut rng = rng(1);

        let mut seen = [0_usize; 6];
        for _ in 0..4000 {
            let c = Conjunction::generate_random(&states, 2, Some(5), &[], &mut rng)
                .unwrap()
                .unwrap();
            seen[c.arity()] += 1;
        }

        for arity in 2..=5 {
            assert!(
                (800..=1200).contains(&seen[arity]),
                "Arity {arity} generated {} times",
                seen[arity]
            );
        }
    }

    #[test]
    fn terms_uniform() {
        let states = six_states();
        let mut rng = rng(2);

        let mut chosen: std::collections::BTreeMap<String, usize> = Default::default();
        for _ in 0..6000 {
            let c = Conjunction::generate_random(&states, 2, None, &[], &mut rng)
                .unwrap()
                .unwrap();
            assert_eq!(c.arity(), 2);

            for term in c.terms() {
                *chosen.entry(term.to_string()).or_default() += 1;
            }
        }

        assert_eq!(chosen.len(), 6);
        for (term, count) in chosen {
            assert!(
                (1700..=2300).contains(&count),
                "{term} chosen {count} times"
            );
        }
    }

    #[test]
    fn required_values_are_current_values() {
        let states = NamedTernaries::from([
            ("p".to_string(), Ternary::Unknown),
            ("q".to_string(), Ternary::False),
            ("r".to_string(), Ternary::True),
        ]);
        let mut rng = rng(3);

        let c = Conjunction::generate_random(&states, 3, None, &[], &mut rng)
            .unwrap()
            .unwrap();

        assert_eq!(c.get_conditions(), states);
    }

    #[test]
    fn hashed_values_kept_with_terms() {
        let states = std::collections::HashMap::from([
            ("p".to_string(), Ternary::Unknown),
            ("q".to_string(), Ternary::False),
            ("r".to_string(), Ternary::True),
            ("s".to_string(), Ternary::Unknown),
        ]);
        let mut rng = rng(9);

        for _ in 0..50 {
            let c = Conjunction::generate_random(&states, 1, Some(3), &["s"], &mut rng)
                .unwrap()
                .unwrap();

            assert!(!c.depends_on("s"));
            for (term, value) in c.conditions() {
                assert_eq!(states.get(term), Some(&value));
            }
        }
    }

    #[test]
    fn clamped_to_pool() {
        let states = six_states();
        let mut rng = rng(4);

        for _ in 0..50 {
            let c = Conjunction::generate_random(&states, 4, Some(10), &["A", "B", "C"], &mut rng)
                .unwrap()
                .unwrap();

            assert_eq!(c.arity(), 3);
            assert!(c.depends_on("D") && c.depends_on("E") && c.depends_on("F"));
        }
    }

    #[test]
    fn exclusion() {
        let states = six_states();
        let mut rng = rng(5);

        for _ in 0..100 {
            let c = Conjunction::generate_random(&states, 1, Some(6), &["A", "F", "Z"], &mut rng)
                .unwrap()
                .unwrap();

            assert!(!c.depends_on("A"));
            assert!(!c.depends_on("F"));
            assert!(c.arity() <= 4);
        }
    }

    #[test]
    fn everything_excluded() {
        let states = six_states();
        let mut rng = rng(6);

        let c = Conjunction::generate_random(
            &states,
            1,
            Some(3),
            &["A", "B", "C", "D", "E", "F"],
            &mut rng,
        );
        assert_eq!(c, Ok(None));

        let c = Conjunction::generate_random(&NamedTernaries::new(), 1, None, &[], &mut rng);
        assert_eq!(c, Ok(None));
    }

    #[test]
    fn invalid_bounds() {
        let states = six_states();
        let mut rng = rng(7);

        assert_eq!(
            Conjunction::generate_random(&states, 0, None, &[], &mut rng),
            Err(err::ErrorKind::Generation(
                err::GenerationError::InvalidMinimum(0)
            ))
        );

        assert_eq!(
            Conjunction::generate_random(&states, 3, Some(2), &[], &mut rng),
            Err(err::ErrorKind::Generation(
                err::GenerationError::InvalidMaximum { min: 3, max: 2 }
            ))
        );

        // Bounds are checked even when no term is eligible.
        assert_eq!(
            Conjunction::generate_random(&NamedTernaries::new(), 0, None, &[], &mut rng),
            Err(err::ErrorKind::Generation(
                err::GenerationError::InvalidMinimum(0)
            ))
        );
    }

    #[test]
    fn seeded_reproducible() {
        let states = six_states();
        let hashed = states
            .iter()
            .map(|(term, value)| (term.clone(), *value))
            .collect::<std::collections::HashMap<_, _>>();

        let mut first = rng(8);
        let mut second = rng(8);

        for _ in 0..20 {
            let a = Conjunction::generate_random(&states, 1, Some(6), &[], &mut first);
            let b = Conjunction::generate_random(&hashed, 1, Some(6), &[], &mut second);
            assert_eq!(a, b);
        }
    }
}

mod generator {
    use super::*;

    #[test]
    fn from_config_bounds() {
        init_logs();
        let states = six_states();

        let mut config = Config::default();
        assert!(config.terms_min.set(2).is_ok());
        assert!(config.terms_max.set(3).is_ok());

        let mut generator = Generator::from_config(config);

        for _ in 0..50 {
            let c = generator.generate(&states, &[]).unwrap().unwrap();
            assert!((2..=3).contains(&c.arity()));
            assert_eq!(c.sat(&states), Ok(true));
        }

        assert_eq!(generator.counters().generated, 50);
        assert_eq!(generator.counters().exhausted, 0);
    }

    #[test]
    fn default_single_term() {
        let states = six_states();
        let mut generator = Generator::from_config(Config::default());

        let c = generator.generate(&states, &[]).unwrap().unwrap();
        assert_eq!(c.arity(), 1);
    }

    #[test]
    fn inverted_bounds() {
        let states = six_states();

        let mut config = Config::default();
        config.terms_min.value = 4;
        config.terms_max.value = 2;

        let mut generator = Generator::from_config(config);
        assert_eq!(
            generator.generate(&states, &[]),
            Err(err::ErrorKind::Generation(
                err::GenerationError::InvalidMaximum { min: 4, max: 2 }
            ))
        );
        assert_eq!(generator.counters().generated, 0);
    }

    #[test]
    fn many_exhausted() {
        let states = six_states();
        let mut generator = Generator::from_config(Config::default());

        let conjunctions = generator
            .generate_many(&states, &["A", "B", "C", "D", "E", "F"], 10)
            .unwrap();

        assert!(conjunctions.is_empty());
        assert_eq!(generator.counters().exhausted, 1);
    }

    #[test]
    fn seeds_vary_first_size() {
        let states = six_states();

        let mut first_sizes = [0_usize; 7];
        for seed in 0..200 {
            let mut config = Config::default();
            config.terms_max.value = 6;
            config.seed.value = seed;

            let mut generator = Generator::from_config(config);
            let c = generator.generate(&states, &[]).unwrap().unwrap();
            first_sizes[c.arity()] += 1;
        }

        for size in 1..=6 {
            assert!(
                first_sizes[size] > 0,
                "No seed drew a first size of {size}: {first_sizes:?}"
            );
        }
    }

    #[test]
    fn same_seed_same_conjunctions() {
        let states = six_states();

        let mut config = Config::default();
        config.terms_max.value = 6;
        config.seed.value = 42;

        let mut a = Generator::from_config(config.clone());
        let mut b = GenericGenerator::from_parts(config, rng(42));

        assert_eq!(
            a.generate_many(&states, &[], 25),
            b.generate_many(&states, &[], 25)
        );
    }
}

//! A small ternary network, with each node given a random rule of two conjunctions over the other nodes.
//!
//! Every node starts unknown, and at each step a node becomes true if some conjunction of its rule is satisfied and false otherwise.

use esle::{
    config::Config,
    generator::Generator,
    structures::{conjunction::Conjunction, named::NamedTernaries, ternary::Ternary},
};

fn main() {
    let names = ["A", "B", "C", "D", "E"];

    let mut states = names
        .iter()
        .map(|name| (name.to_string(), Ternary::Unknown))
        .collect::<NamedTernaries>();
    states.insert("A".to_string(), Ternary::True);

    let mut config = Config::default();
    config.terms_max.value = 3;
    config.seed.value = 2024;
    let mut generator = Generator::from_config(config);

    let mut rules: Vec<(&str, Vec<Conjunction>)> = Vec::new();
    for name in names {
        let mut rule = match generator.generate_many(&states, &[name], 2) {
            Ok(rule) => rule,
            Err(e) => {
                println!("Failed to generate a rule for {name}: {e}");
                return;
            }
        };

        // Rules drawn from the initial state would otherwise only fire on unknown inputs.
        for conjunction in &mut rule {
            let flipped = conjunction
                .conditions()
                .map(|(term, value)| match value {
                    Ternary::Unknown => (term.to_string(), Ternary::True),
                    _ => (term.to_string(), value),
                })
                .collect::<NamedTernaries>();
            conjunction.assign_conditions(&flipped);
        }

        println!("{name} ← {}", display_rule(&rule));
        rules.push((name, rule));
    }

    for step in 0..6 {
        println!("{step}: {}", display_states(&states));

        let mut next = NamedTernaries::new();
        for (name, rule) in &rules {
            let mut fired = false;
            for conjunction in rule {
                match conjunction.sat(&states) {
                    Ok(true) => fired = true,
                    Ok(false) => {}
                    Err(e) => {
                        println!("{e}");
                        return;
                    }
                }
            }
            next.insert(name.to_string(), Ternary::from(fired));
        }
        states = next;
    }
}

fn display_rule(rule: &[Conjunction]) -> String {
    rule.iter()
        .map(|conjunction| format!("({conjunction})"))
        .collect::<Vec<_>>()
        .join(" ∨ ")
}

fn display_states(states: &NamedTernaries) -> String {
    states
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

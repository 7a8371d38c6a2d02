use anyhow::Context;
use pair_counts::classify_pairs_with_settings;
use strum::IntoEnumIterator;

use crate::{
    checks::{check, CheckInput, Property},
    random::{DeterministicRandomProvider, RandomProvider},
};

mod config;
mod results;

pub use config::CheckConfig;
pub use results::CheckResults;

use results::CheckResultsBuilder;

/// Generate `rounds_per_seed` inputs from `seed` and check every property on each of them.
/// Stops at the first violated property.
pub fn run(seed: u64, config: &CheckConfig) -> anyhow::Result<CheckResults> {
    log::debug!("Seed: {}", seed);
    // Inputs and the permutations used by the checks come from separate providers,
    // so adding a property does not change the inputs generated for a seed.
    let base_random_provider = DeterministicRandomProvider::new(seed);
    let input_random_provider = DeterministicRandomProvider::new(base_random_provider.random_u64());
    let check_random_provider = DeterministicRandomProvider::new(base_random_provider.random_u64());

    let mut results = CheckResultsBuilder::new();

    for round in 0..config.rounds_per_seed {
        let len = input_random_provider.random_below(config.max_len as u64 + 1) as usize;
        let x = input_random_provider.random_sequence(len, config.alphabet_size, config.nan_odds);
        let y = input_random_provider.random_sequence(len, config.alphabet_size, config.nan_odds);

        let counts = classify_pairs_with_settings(&x, &y, &config.settings)
            .with_context(|| format!("seed {} round {}: classification failed", seed, round))?;

        let input = CheckInput {
            x: &x,
            y: &y,
            counts,
            settings: &config.settings,
        };
        results.add_input(counts, x.iter().chain(y.iter()).any(|v| v.is_nan()));

        for property in Property::iter() {
            let applied = check(property, &input, &check_random_provider).with_context(|| {
                format!(
                    "seed {} round {}: property {} violated\nx = {:?}\ny = {:?}",
                    seed, round, property, x, y
                )
            })?;

            if applied {
                results.property_passed();
            } else {
                results.property_skipped();
            }
        }
    }

    Ok(results.build())
}

use std::fs::OpenOptions;

use fern::colors::ColoredLevelConfig;
use rayon::prelude::*;
use simulation::{CheckConfig, CheckResults};

mod checks;
mod random;
mod simulation;

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let config = CheckConfig::default();
    log::info!(
        "Checking seeds {:?}, {} inputs each, up to {} observations",
        config.seeds,
        config.rounds_per_seed,
        config.max_len
    );

    // Every seed is independent, so they can be checked in any order.
    let results = config
        .seeds
        .clone()
        .into_par_iter()
        .map(|seed| simulation::run(seed, &config))
        .collect::<anyhow::Result<Vec<_>>>()?
        .into_iter()
        .fold(CheckResults::default(), CheckResults::merge);

    log::info!("Inputs checked: {}", results.inputs_checked);
    log::info!("Inputs containing NaN: {}", results.inputs_with_nan);
    log::info!(
        "Property checks passed: {}, not applicable: {}",
        results.properties_passed,
        results.properties_skipped
    );
    log::info!("Total counts: {:?}", results.totals);
    if let Some(tau_b) = results.totals.tau_b() {
        // Independent random inputs, so this should be close to zero.
        log::info!("Pooled tau-b: {:.4}", tau_b);
    }

    Ok(())
}

fn setup_logging() -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new()
        .debug(fern::colors::Color::Cyan)
        .info(fern::colors::Color::Green)
        .warn(fern::colors::Color::Yellow)
        .error(fern::colors::Color::Red);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open("pair-counts-testing.log")?;

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let start_length = record.target().len();
            let max_len = 30;
            let (target, target_padding) = if start_length > max_len {
                (&record.target()[start_length - max_len..], "".to_string())
            } else {
                (record.target(), " ".repeat(max_len - start_length))
            };
            out.finish(format_args!(
                "[{}{}][{}] {}",
                target,
                target_padding,
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .level_for("pair_counts", log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(file)
        .apply()?;

    Ok(())
}

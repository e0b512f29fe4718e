//! Simulation runner.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::SimConfig;
use super::report::{RarityStats, SimReport};
use crate::catalog::Catalogs;
use crate::economy::ValuationService;
use crate::error::UnknownKeyError;
use crate::fishing::{expected_distribution, resolve_catch};

/// Run the simulation and return a report.
///
/// Fails only if the configured bait is not in the catalog. Attempts with
/// no eligible rarity are counted, not treated as errors.
pub fn run_simulation(
    catalogs: &Catalogs,
    config: &SimConfig,
    valuation: &ValuationService,
) -> Result<SimReport, UnknownKeyError> {
    let bait = config
        .bait
        .as_deref()
        .map(|key| catalogs.baits.get(key))
        .transpose()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rarities = catalogs.rarities.all();
    let mut counts = vec![0u64; rarities.len()];
    let mut no_catch = 0u64;
    let mut critical_catches = 0u64;
    let mut total_value = 0.0;

    for trial in 0..config.trials {
        let catch = match resolve_catch(&catalogs.rarities, bait, config.lure_level, &mut rng) {
            Ok(catch) => catch,
            Err(_) => {
                no_catch += 1;
                continue;
            }
        };

        if let Some(i) = rarities.iter().position(|r| r.key == catch.rarity.key) {
            counts[i] += 1;
        }
        if catch.critical {
            critical_catches += 1;
        }
        total_value += valuation.value_of(&catch, 1);

        if config.verbosity >= 2 {
            println!(
                "Catch {}/{} - {}{}",
                trial + 1,
                config.trials,
                catch.rarity.key,
                if catch.critical { " (critical)" } else { "" }
            );
        }
    }

    let caught = config.trials as u64 - no_catch;
    let expected = expected_distribution(&catalogs.rarities, bait, config.lure_level);
    let rarity_stats = expected
        .iter()
        .zip(&counts)
        .map(|(expected, &count)| RarityStats {
            key: expected.rarity.key.clone(),
            count,
            observed_pct: if caught > 0 {
                count as f64 / caught as f64 * 100.0
            } else {
                0.0
            },
            expected_pct: expected.weight * 100.0,
        })
        .collect();

    Ok(SimReport {
        trials: config.trials,
        bait: bait.map(|b| b.key.clone()),
        lure_level: config.lure_level,
        rarities: rarity_stats,
        no_catch,
        critical_catches,
        total_value,
    })
}

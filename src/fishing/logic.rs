//! Weighted rarity selection with bait and lure modifiers.
//!
//! Every modifier is an additive, percentage-point change to a rarity's
//! chance, in the same units as `Chance` in the config:
//!
//! - lure: `lure_chance_delta * L` on every rarity
//! - bait: `bonus_chance` on each targeted rarity, plus `bonus_chance * L`
//!   more when the bait is enchanted
//!
//! The summed chance is clamped at zero. With a bait, rarities outside its
//! targets get weight zero. One rarity is then drawn in proportion to the
//! remaining weights.

use rand::Rng;

use super::types::{ResolvedCatch, WeightedRarity};
use crate::catalog::{Bait, RarityCatalog};
use crate::error::ResolutionError;

/// Effective weight of every rarity, in catalog order.
pub fn effective_chances<'a>(
    rarities: &'a RarityCatalog,
    bait: Option<&Bait>,
    lure_level: u32,
) -> Vec<WeightedRarity<'a>> {
    let level = lure_level as f64;

    rarities
        .all()
        .iter()
        .map(|rarity| {
            let mut chance = rarity.base_chance;
            let mut eligible = true;

            if let Some(bait) = bait {
                if bait.is_target(&rarity.key) {
                    chance += bait.bonus_chance;
                    if bait.enchanted {
                        chance += bait.bonus_chance * level;
                    }
                } else {
                    eligible = false;
                }
            }

            chance += rarity.lure_chance_delta * level;

            let weight = if eligible {
                chance.max(0.0).min(f64::MAX)
            } else {
                0.0
            };
            WeightedRarity { rarity, weight }
        })
        .collect()
}

/// Closed-form selection probability of every rarity, in catalog order.
///
/// All zeros when nothing is eligible.
pub fn expected_distribution<'a>(
    rarities: &'a RarityCatalog,
    bait: Option<&Bait>,
    lure_level: u32,
) -> Vec<WeightedRarity<'a>> {
    let mut table = effective_chances(rarities, bait, lure_level);
    let Some(scale) = weight_scale(&table) else {
        table.iter_mut().for_each(|entry| entry.weight = 0.0);
        return table;
    };
    let total: f64 = table.iter().map(|w| w.weight / scale).sum();
    for entry in &mut table {
        entry.weight = entry.weight / scale / total;
    }
    table
}

/// Largest weight in the table, or `None` when no weight is positive.
///
/// Weights are divided by this before summing, so a table of huge but
/// finite weights cannot overflow its total.
fn weight_scale(table: &[WeightedRarity]) -> Option<f64> {
    let largest = table.iter().map(|w| w.weight).fold(0.0, f64::max);
    (largest > 0.0 && largest.is_finite()).then_some(largest)
}

/// Pick one entry in proportion to its weight.
///
/// Draws uniformly from `[0, total)` and returns the first entry whose
/// cumulative interval contains the draw.
pub fn select_weighted<'a, 'b>(
    table: &'b [WeightedRarity<'a>],
    rng: &mut impl Rng,
) -> Result<&'b WeightedRarity<'a>, ResolutionError> {
    let scale = weight_scale(table).ok_or(ResolutionError::NoEligibleRarity)?;
    let total: f64 = table.iter().map(|w| w.weight / scale).sum();

    let roll = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    for entry in table.iter().filter(|w| w.weight > 0.0) {
        cumulative += entry.weight / scale;
        if roll < cumulative {
            return Ok(entry);
        }
    }

    // Rounding can leave the roll a hair above the final sum
    table
        .iter()
        .rev()
        .find(|w| w.weight > 0.0)
        .ok_or(ResolutionError::NoEligibleRarity)
}

/// Whether a catch made with `bait` is critical.
pub fn roll_critical(bait: &Bait, rng: &mut impl Rng) -> bool {
    let roll: f64 = rng.gen_range(0.0..100.0);
    roll < bait.critical_chance
}

/// Resolve one catch against a rarity catalog.
pub fn resolve_catch(
    rarities: &RarityCatalog,
    bait: Option<&Bait>,
    lure_level: u32,
    rng: &mut impl Rng,
) -> Result<ResolvedCatch, ResolutionError> {
    let table = effective_chances(rarities, bait, lure_level);
    let selected = select_weighted(&table, rng)?;

    let critical = match bait {
        Some(bait) => roll_critical(bait, rng),
        None => false,
    };

    log::debug!(
        "Resolved catch: {} (critical: {}, bait: {:?}, lure: {})",
        selected.rarity.key,
        critical,
        bait.map(|b| b.key.as_str()),
        lure_level
    );

    Ok(ResolvedCatch {
        rarity: selected.rarity.clone(),
        critical,
        used_bait: bait.cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BaitCatalog;
    use crate::config::{default_baits, default_rarities, RarityEntry};
    use indexmap::IndexMap;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn default_catalogs() -> (RarityCatalog, BaitCatalog) {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        let baits = BaitCatalog::load(&default_baits(), &rarities).unwrap();
        (rarities, baits)
    }

    fn weights(table: &[WeightedRarity]) -> Vec<f64> {
        table.iter().map(|w| w.weight).collect()
    }

    fn single(key: &str, chance: f64, lure: f64) -> RarityCatalog {
        let mut entries = IndexMap::new();
        entries.insert(
            key.to_string(),
            RarityEntry {
                chance,
                weight: None,
                color: String::new(),
                extra_health: 0,
                sell_price: 1.0,
                broadcast: false,
                lure_chance_change: lure,
            },
        );
        RarityCatalog::load(&entries).unwrap()
    }

    #[test]
    fn test_effective_chances_without_modifiers_are_base_chances() {
        let (rarities, _) = default_catalogs();
        let table = effective_chances(&rarities, None, 0);
        assert_eq!(weights(&table), [5.0, 50.0, 25.0, 10.0]);
    }

    #[test]
    fn test_lure_shifts_by_delta_per_level() {
        let (rarities, _) = default_catalogs();
        // Tiny 5-10 clamps to zero
        let table = effective_chances(&rarities, None, 2);
        assert_eq!(weights(&table), [0.0, 34.0, 35.0, 26.0]);
    }

    #[test]
    fn test_bait_adds_bonus_and_restricts_targets() {
        let (rarities, baits) = default_catalogs();
        let worms = baits.get("Worms").unwrap();
        let table = effective_chances(&rarities, Some(worms), 0);
        assert_eq!(weights(&table), [105.0, 150.0, 0.0, 0.0]);
    }

    #[test]
    fn test_enchanted_bait_scales_bonus_with_lure() {
        let (rarities, baits) = default_catalogs();
        let ultra = baits.get("Ultra Worms").unwrap();
        // Huge: 10 + 25 + 25*2 + 8*2
        let table = effective_chances(&rarities, Some(ultra), 2);
        assert_eq!(weights(&table), [0.0, 0.0, 0.0, 101.0]);
    }

    #[test]
    fn test_plain_bait_bonus_ignores_lure_level() {
        let (rarities, baits) = default_catalogs();
        let super_worms = baits.get("Super Worms").unwrap();
        // Large: 25 + 15 + 5*2
        let table = effective_chances(&rarities, Some(super_worms), 2);
        assert_eq!(weights(&table), [0.0, 0.0, 50.0, 0.0]);
    }

    #[test]
    fn test_expected_distribution_sums_to_one() {
        let (rarities, _) = default_catalogs();
        let table = expected_distribution(&rarities, None, 0);
        let total: f64 = table.iter().map(|w| w.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((table[1].weight - 50.0 / 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_expected_distribution_all_zero_when_nothing_eligible() {
        let rarities = single("Ghost", 0.0, 0.0);
        let table = expected_distribution(&rarities, None, 0);
        assert_eq!(weights(&table), [0.0]);
    }

    #[test]
    fn test_resolve_without_bait_is_never_critical() {
        let (rarities, _) = default_catalogs();
        let mut rng = create_test_rng();
        for _ in 0..1000 {
            let catch = resolve_catch(&rarities, None, 0, &mut rng).unwrap();
            assert!(!catch.critical);
            assert!(catch.used_bait.is_none());
        }
    }

    #[test]
    fn test_resolve_with_all_zero_weights_fails() {
        let rarities = single("Ghost", 0.0, 0.0);
        let mut rng = create_test_rng();
        assert_eq!(
            resolve_catch(&rarities, None, 0, &mut rng),
            Err(ResolutionError::NoEligibleRarity)
        );
    }

    #[test]
    fn test_negative_lure_can_empty_the_table() {
        let rarities = single("Shy", 10.0, -5.0);
        let mut rng = create_test_rng();
        assert!(resolve_catch(&rarities, None, 1, &mut rng).is_ok());
        assert_eq!(
            resolve_catch(&rarities, None, 2, &mut rng),
            Err(ResolutionError::NoEligibleRarity)
        );
    }

    #[test]
    fn test_zero_weight_rarity_is_never_selected() {
        let (rarities, _) = default_catalogs();
        let mut rng = create_test_rng();
        // Lure 1 drives Tiny to zero
        for _ in 0..5000 {
            let catch = resolve_catch(&rarities, None, 1, &mut rng).unwrap();
            assert_ne!(catch.rarity.key, "Tiny");
        }
    }

    #[test]
    fn test_select_weighted_on_empty_table_fails() {
        let mut rng = create_test_rng();
        assert_eq!(
            select_weighted(&[], &mut rng).unwrap_err(),
            ResolutionError::NoEligibleRarity
        );
    }

    #[test]
    fn test_huge_chances_do_not_overflow_the_draw() {
        let mut entries = IndexMap::new();
        for key in ["Leviathan", "Kraken"] {
            entries.insert(
                key.to_string(),
                RarityEntry {
                    chance: 1e308,
                    weight: None,
                    color: String::new(),
                    extra_health: 0,
                    sell_price: 1.0,
                    broadcast: false,
                    lure_chance_change: 0.0,
                },
            );
        }
        let rarities = RarityCatalog::load(&entries).unwrap();
        let mut rng = create_test_rng();

        let mut krakens = 0;
        for _ in 0..2_000 {
            let catch = resolve_catch(&rarities, None, 0, &mut rng).unwrap();
            if catch.rarity.key == "Kraken" {
                krakens += 1;
            }
        }
        assert!(krakens > 850 && krakens < 1_150, "krakens: {}", krakens);

        let expected = expected_distribution(&rarities, None, 0);
        assert_eq!(weights(&expected), [0.5, 0.5]);
    }

    #[test]
    fn test_overflowing_lure_bonus_is_capped() {
        let rarities = single("Abyssal", 1e308, 1e308);
        let table = effective_chances(&rarities, None, 10);
        assert_eq!(weights(&table), [f64::MAX]);

        let mut rng = create_test_rng();
        let catch = resolve_catch(&rarities, None, 10, &mut rng).unwrap();
        assert_eq!(catch.rarity.key, "Abyssal");
    }

    #[test]
    fn test_critical_chance_extremes() {
        let (_, baits) = default_catalogs();
        let mut rng = create_test_rng();
        let mut bait = baits.get("Worms").unwrap().clone();

        bait.critical_chance = 0.0;
        assert!((0..1000).all(|_| !roll_critical(&bait, &mut rng)));

        bait.critical_chance = 100.0;
        assert!((0..1000).all(|_| roll_critical(&bait, &mut rng)));
    }

    #[test]
    fn test_critical_rate_tracks_chance() {
        let (rarities, baits) = default_catalogs();
        let ultra = baits.get("Ultra Worms").unwrap();
        let mut rng = create_test_rng();

        let trials = 20_000;
        let criticals = (0..trials)
            .filter(|_| resolve_catch(&rarities, Some(ultra), 0, &mut rng).unwrap().critical)
            .count();
        let rate = criticals as f64 / trials as f64;
        assert!((rate - 0.20).abs() < 0.02, "critical rate {}", rate);
    }

    #[test]
    fn test_resolved_catch_passes_through_attributes() {
        let (rarities, baits) = default_catalogs();
        let ultra = baits.get("Ultra Worms").unwrap();
        let mut rng = create_test_rng();

        let catch = resolve_catch(&rarities, Some(ultra), 0, &mut rng).unwrap();
        assert_eq!(catch.rarity.key, "Huge");
        assert_eq!(catch.extra_health(), 4);
        assert!(catch.should_broadcast());
        assert_eq!(catch.color_code(), "5");
        assert_eq!(catch.used_bait.as_ref().map(|b| b.key.as_str()), Some("Ultra Worms"));
    }
}

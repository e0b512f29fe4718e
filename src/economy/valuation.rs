//! Sell value of caught fish and bait.

use crate::catalog::Bait;
use crate::config::Settings;
use crate::core::constants::DEFAULT_CRITICAL_VALUE_MULTIPLIER;
use crate::fishing::ResolvedCatch;

/// Converts resolved catches into money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationService {
    critical_multiplier: f64,
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new(DEFAULT_CRITICAL_VALUE_MULTIPLIER)
    }
}

impl ValuationService {
    /// `critical_multiplier` scales the value of critical catches.
    /// Non-finite or negative values fall back to 1.
    pub fn new(critical_multiplier: f64) -> Self {
        let critical_multiplier = if critical_multiplier.is_finite() && critical_multiplier >= 0.0
        {
            critical_multiplier
        } else {
            log::warn!(
                "Invalid critical value multiplier {}, using {}",
                critical_multiplier,
                DEFAULT_CRITICAL_VALUE_MULTIPLIER
            );
            DEFAULT_CRITICAL_VALUE_MULTIPLIER
        };
        Self {
            critical_multiplier,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.critical_value_multiplier)
    }

    pub fn critical_multiplier(&self) -> f64 {
        self.critical_multiplier
    }

    /// Value of `quantity` fish of the caught rarity.
    pub fn value_of(&self, catch: &ResolvedCatch, quantity: u32) -> f64 {
        let base = quantity as f64 * catch.rarity.sell_price;
        if catch.critical {
            base * self.critical_multiplier
        } else {
            base
        }
    }

    /// Sum of [`value_of`](Self::value_of) for one fish per catch.
    pub fn total_value_of<'a, I>(&self, catches: I) -> f64
    where
        I: IntoIterator<Item = &'a ResolvedCatch>,
    {
        catches.into_iter().map(|c| self.value_of(c, 1)).sum()
    }

    /// Sum over stacks of identical catches, as when selling a whole inventory.
    pub fn total_value_of_stacks<'a, I>(&self, stacks: I) -> f64
    where
        I: IntoIterator<Item = (&'a ResolvedCatch, u32)>,
    {
        stacks
            .into_iter()
            .map(|(catch, quantity)| self.value_of(catch, quantity))
            .sum()
    }

    /// Resale value of `quantity` bait items.
    pub fn bait_value(&self, bait: &Bait, quantity: u32) -> f64 {
        quantity as f64 * bait.sell_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BaitCatalog, RarityCatalog};
    use crate::config::{default_baits, default_rarities};

    fn catch(key: &str, critical: bool) -> ResolvedCatch {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        ResolvedCatch {
            rarity: rarities.get(key).unwrap().clone(),
            critical,
            used_bait: None,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_value_is_quantity_times_price() {
        let service = ValuationService::default();
        assert!(close(service.value_of(&catch("Normal", false), 1), 19.99));
        assert!(close(service.value_of(&catch("Normal", false), 3), 59.97));
        assert_eq!(service.value_of(&catch("Huge", false), 0), 0.0);
    }

    #[test]
    fn test_default_critical_has_no_bonus() {
        let service = ValuationService::default();
        assert_eq!(
            service.value_of(&catch("Large", true), 2),
            service.value_of(&catch("Large", false), 2)
        );
    }

    #[test]
    fn test_configured_critical_multiplier() {
        let service = ValuationService::new(2.0);
        assert!(close(service.value_of(&catch("Large", true), 1), 99.98));
        assert!(close(service.value_of(&catch("Large", false), 1), 49.99));
    }

    #[test]
    fn test_invalid_multiplier_falls_back() {
        assert_eq!(ValuationService::new(f64::NAN).critical_multiplier(), 1.0);
        assert_eq!(ValuationService::new(-2.0).critical_multiplier(), 1.0);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            critical_value_multiplier: 1.5,
            ..Default::default()
        };
        assert_eq!(
            ValuationService::from_settings(&settings).critical_multiplier(),
            1.5
        );
    }

    #[test]
    fn test_total_matches_individual_sum_in_any_order() {
        let service = ValuationService::new(3.0);
        let catches = vec![
            catch("Tiny", false),
            catch("Huge", true),
            catch("Normal", false),
            catch("Large", true),
        ];
        let individual: f64 = catches.iter().map(|c| service.value_of(c, 1)).sum();

        let forward = service.total_value_of(&catches);
        let backward = service.total_value_of(catches.iter().rev());
        assert!(close(forward, individual));
        assert!(close(backward, individual));
    }

    #[test]
    fn test_total_of_nothing_is_zero() {
        let service = ValuationService::default();
        assert_eq!(service.total_value_of(Vec::<ResolvedCatch>::new().iter()), 0.0);
    }

    #[test]
    fn test_stacks_value() {
        let service = ValuationService::default();
        let tiny = catch("Tiny", false);
        let huge = catch("Huge", false);
        let total = service.total_value_of_stacks([(&tiny, 2), (&huge, 1)]);
        assert!(close(total, 2.0 * 4.99 + 99.99));
    }

    #[test]
    fn test_bait_value() {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        let baits = BaitCatalog::load(&default_baits(), &rarities).unwrap();
        let service = ValuationService::default();
        assert!(close(service.bait_value(baits.get("Worms").unwrap(), 4), 19.96));
    }
}

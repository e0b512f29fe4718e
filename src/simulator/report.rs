//! Simulation report generation.

use serde::Serialize;

/// Observed and expected results for one rarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RarityStats {
    pub key: String,
    pub count: u64,
    /// Share of successful catches, in percent
    pub observed_pct: f64,
    /// Closed-form selection probability, in percent
    pub expected_pct: f64,
}

/// Results of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub trials: u32,
    pub bait: Option<String>,
    pub lure_level: u32,
    pub rarities: Vec<RarityStats>,
    /// Attempts where no rarity was eligible
    pub no_catch: u64,
    pub critical_catches: u64,
    pub total_value: f64,
}

impl SimReport {
    /// Successful catches.
    pub fn caught(&self) -> u64 {
        self.trials as u64 - self.no_catch
    }

    /// Pearson chi-square statistic of observed counts against expectation.
    ///
    /// Rarities with zero expected probability are skipped.
    pub fn chi_square(&self) -> f64 {
        let caught = self.caught() as f64;
        self.rarities
            .iter()
            .filter(|r| r.expected_pct > 0.0)
            .map(|r| {
                let expected = r.expected_pct / 100.0 * caught;
                let diff = r.count as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    CATCH SIMULATION REPORT                     \n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("  Trials:     {}\n", self.trials));
        report.push_str(&format!(
            "  Bait:       {}\n",
            self.bait.as_deref().unwrap_or("none")
        ));
        report.push_str(&format!("  Lure Level: {}\n\n", self.lure_level));

        report.push_str("── RARITY DISTRIBUTION ──────────────────────────────────────────\n");
        report.push_str("  Rarity           Count    Observed   Expected\n");
        report.push_str("  ──────           ─────    ────────   ────────\n");
        for r in &self.rarities {
            let bar = "█".repeat((r.observed_pct / 2.0).round() as usize);
            report.push_str(&format!(
                "  {:<14} {:>7}    {:>6.2}%    {:>6.2}%  {}\n",
                r.key, r.count, r.observed_pct, r.expected_pct, bar
            ));
        }
        report.push('\n');

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Caught:           {}\n", self.caught()));
        report.push_str(&format!("  No Catch:         {}\n", self.no_catch));
        report.push_str(&format!("  Critical Catches: {}\n", self.critical_catches));
        report.push_str(&format!("  Total Value:      {:.2}\n", self.total_value));
        if self.caught() > 0 {
            report.push_str(&format!(
                "  Value per Catch:  {:.2}\n",
                self.total_value / self.caught() as f64
            ));
            report.push_str(&format!("  Chi-Square:       {:.3}\n", self.chi_square()));
        }

        report
    }

    /// Export as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

//! Rendering amounts as currency strings.

use crate::config::Settings;
use crate::core::constants::{COST_PLACEHOLDER, DEFAULT_ECONOMY_FORMAT};

/// Turns an amount of money into display text.
pub trait EconomyFormatter {
    fn format(&self, amount: f64) -> String;
}

/// Formats amounts by substituting `%cost%` in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFormatter {
    template: String,
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_ECONOMY_FORMAT)
    }
}

impl TemplateFormatter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.economy_format.clone())
    }
}

impl EconomyFormatter for TemplateFormatter {
    fn format(&self, amount: f64) -> String {
        self.template.replace(COST_PLACEHOLDER, &format!("{:.2}", amount))
    }
}

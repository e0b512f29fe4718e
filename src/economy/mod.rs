//! Catch valuation and currency formatting.

pub mod format;
pub mod valuation;

pub use format::{EconomyFormatter, TemplateFormatter};
pub use valuation::ValuationService;

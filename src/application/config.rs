use serde::{Deserialize, Serialize};

use crate::domain::EntryRules;

use super::{AppError, DEFAULT_TOP_AVERAGES, DEFAULT_TOP_BALANCES};

/// Settings for [`SummaryService`](super::SummaryService).
/// Every field is optional in the serialized form and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub rules: EntryRules,
    /// How many accounts the top balances report returns
    pub top_balances: usize,
    /// How many accounts the top averages report returns
    pub top_averages: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            rules: EntryRules::default(),
            top_balances: DEFAULT_TOP_BALANCES,
            top_averages: DEFAULT_TOP_AVERAGES,
        }
    }
}

impl SummaryConfig {
    /// Parse a JSON configuration document.
    /// Example: `{"rules": {"max_amount": 5000}, "top_balances": 5}`
    pub fn from_json(input: &str) -> Result<Self, AppError> {
        let config: SummaryConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let EntryRules {
            min_amount,
            max_amount,
        } = self.rules;

        if !min_amount.is_finite() || !max_amount.is_finite() {
            return Err(AppError::InvalidConfig(
                "amount bounds must be finite".to_string(),
            ));
        }
        if min_amount > max_amount {
            return Err(AppError::InvalidConfig(format!(
                "min_amount ({}) is greater than max_amount ({})",
                min_amount, max_amount
            )));
        }
        Ok(())
    }
}

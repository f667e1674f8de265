use crate::domain::{
    balances_by_cpf, min_max_for_cpf, validate_batch, validate_entry_with, AccountBalance, Entry,
    EntryError, ValidationReport,
};

use super::{top_averages_n, top_balances, AppError, AverageBalance, SummaryConfig};

/// Application service exposing validation and reports with one set of settings.
/// This is the primary interface for any client embedding the library.
#[derive(Debug, Clone, Default)]
pub struct SummaryService {
    config: SummaryConfig,
}

impl SummaryService {
    /// Create a service, rejecting inconsistent settings.
    pub fn new(config: SummaryConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_json(input: &str) -> Result<Self, AppError> {
        Ok(Self {
            config: SummaryConfig::from_json(input)?,
        })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    // ========================
    // Validation
    // ========================

    pub fn validate(&self, entry: &Entry) -> Result<(), EntryError> {
        validate_entry_with(entry, &self.config.rules)
    }

    /// Same as [`validate`](Self::validate), rendered as the user-facing message.
    pub fn validation_message(&self, entry: &Entry) -> Option<String> {
        self.validate(entry).err().map(|e| e.to_string())
    }

    pub fn validate_batch(&self, entries: &[Entry]) -> ValidationReport {
        validate_batch(entries, &self.config.rules)
    }

    /// Keep only the entries that pass validation, in input order.
    pub fn accepted_entries(&self, entries: &[Entry]) -> Vec<Entry> {
        self.validate_batch(entries)
            .accepted
            .into_iter()
            .map(|i| entries[i].clone())
            .collect()
    }

    // ========================
    // Reports
    // ========================

    pub fn balances(&self, entries: &[Entry]) -> Vec<AccountBalance> {
        balances_by_cpf(entries)
    }

    pub fn extremes(&self, identifier: &str, entries: &[Entry]) -> Vec<Entry> {
        min_max_for_cpf(identifier, entries)
    }

    pub fn top_balances(&self, entries: &[Entry]) -> Vec<AccountBalance> {
        top_balances(entries, self.config.top_balances)
    }

    pub fn top_averages(&self, entries: &[Entry]) -> Vec<AverageBalance> {
        top_averages_n(entries, self.config.top_averages)
    }
}

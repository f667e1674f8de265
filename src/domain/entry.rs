use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cpf::has_punctuated_layout;
use super::{is_valid_cpf, strip_formatting, Amount};

pub const DEFAULT_MIN_AMOUNT: f64 = -2000.0;
pub const DEFAULT_MAX_AMOUNT: f64 = 15000.0;

/// One ledger transaction: a signed amount booked against a CPF.
/// Entries are supplied by the caller and never modified here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(alias = "cpf")]
    pub identifier: String,
    #[serde(alias = "valor", default = "missing_amount")]
    pub amount: Amount,
}

fn missing_amount() -> Amount {
    Amount::INVALID
}

impl Entry {
    pub fn new(identifier: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            identifier: identifier.into(),
            amount: amount.into(),
        }
    }
}

/// Accepted amount range for a single entry (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryRules {
    pub min_amount: f64,
    pub max_amount: f64,
}

impl Default for EntryRules {
    fn default() -> Self {
        Self {
            min_amount: DEFAULT_MIN_AMOUNT,
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

impl EntryRules {
    pub fn accepts(&self, amount: Amount) -> bool {
        match amount.value() {
            Some(value) => value >= self.min_amount && value <= self.max_amount,
            None => false,
        }
    }
}

/// Messages are shown to end users verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("CPF inválido.")]
    InvalidCpf,

    #[error("CPF deve conter apenas caracteres numéricos.")]
    NonNumericCpf,

    #[error("Valor deve ser um número entre {min} e {max}")]
    AmountOutOfRange { min: f64, max: f64 },
}

/// Validate an entry against the default rules.
pub fn validate_entry(entry: &Entry) -> Result<(), EntryError> {
    validate_entry_with(entry, &EntryRules::default())
}

/// Validate an entry. The CPF is checked before the amount.
pub fn validate_entry_with(entry: &Entry, rules: &EntryRules) -> Result<(), EntryError> {
    let result = check_entry(entry, rules);
    if let Err(reason) = &result {
        tracing::debug!(identifier = %entry.identifier, amount = %entry.amount, %reason, "entry rejected");
    }
    result
}

fn check_entry(entry: &Entry, rules: &EntryRules) -> Result<(), EntryError> {
    if !is_valid_cpf(&entry.identifier) {
        return Err(EntryError::InvalidCpf);
    }

    // Runs on the stripped digits, so it never matches.
    if has_punctuated_layout(&strip_formatting(&entry.identifier)) {
        return Err(EntryError::NonNumericCpf);
    }

    if !rules.accepts(entry.amount) {
        return Err(EntryError::AmountOutOfRange {
            min: rules.min_amount,
            max: rules.max_amount,
        });
    }

    Ok(())
}

/// Validate an entry and return the failure message, or `None` when it is valid.
pub fn validation_message(entry: &Entry) -> Option<String> {
    validate_entry(entry).err().map(|e| e.to_string())
}

/// Outcome of validating a batch of entries, by position in the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub accepted: Vec<usize>,
    pub rejected: Vec<RejectedEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEntry {
    pub index: usize,
    pub error: EntryError,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validate every entry, collecting failures instead of stopping at the first.
pub fn validate_batch(entries: &[Entry], rules: &EntryRules) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, entry) in entries.iter().enumerate() {
        match validate_entry_with(entry, rules) {
            Ok(()) => report.accepted.push(index),
            Err(error) => report.rejected.push(RejectedEntry { index, error }),
        }
    }

    tracing::debug!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "batch validated"
    );
    report
}

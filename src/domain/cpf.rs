use std::fmt;

use serde::{Deserialize, Serialize};

use super::EntryError;

pub const CPF_LENGTH: usize = 11;

/// Remove every non-digit character.
/// Example: "529.982.247-25" -> "52998224725"
pub fn strip_formatting(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize and checksum-validate a CPF.
pub fn is_valid_cpf(raw: &str) -> bool {
    has_valid_check_digits(&strip_formatting(raw))
}

/// Validate the two trailing check digits of an already stripped CPF.
fn has_valid_check_digits(cpf: &str) -> bool {
    if cpf == "00000000000" {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LENGTH || digits.len() != cpf.len() {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Digit at 1-based position p is weighted (len + 2 - p).
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        rest => rest,
    }
}

/// Matches the punctuated `NNN.NNN.NNN-NN` layout, where each separator
/// before the dash may be any character other than a line terminator.
pub(crate) fn has_punctuated_layout(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 14 {
        return false;
    }

    chars.iter().enumerate().all(|(i, c)| match i {
        3 | 7 => !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'),
        11 => *c == '-',
        _ => c.is_ascii_digit(),
    })
}

/// A checksum-validated CPF, stored as its 11 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, EntryError> {
        let digits = strip_formatting(raw);
        if !has_valid_check_digits(&digits) {
            return Err(EntryError::InvalidCpf);
        }
        Ok(Self(digits))
    }

    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Cpf {
    type Error = EntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cpf::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A ledger amount. Upstream records may carry something that is not a number,
/// so the amount keeps an explicit invalid state instead of relying on NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(Option<f64>);

impl Amount {
    pub const ZERO: Amount = Amount(Some(0.0));
    pub const INVALID: Amount = Amount(None);

    /// NaN maps to the invalid amount.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::INVALID
        } else {
            Self(Some(value))
        }
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }

    /// Divide by an entry count. An empty count yields the invalid amount.
    pub fn mean_of(self, count: usize) -> Self {
        match self.0 {
            Some(total) if count > 0 => Self::new(total / count as f64),
            _ => Self::INVALID,
        }
    }

    /// Ordering used for ranking: valid amounts compare numerically and
    /// always sort before invalid ones.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Highest valid amount first, invalid amounts still last.
    pub fn descending_cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(_), Some(_)) => other.ranking_cmp(self),
            _ => self.ranking_cmp(other),
        }
    }

    /// Render with exactly three decimal places.
    pub fn to_fixed3(self) -> String {
        match self.0 {
            Some(value) => format_fixed3(value),
            None => "NaN".to_string(),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::new(value as f64)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => Amount::new(a + b),
            _ => Amount::INVALID,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "NaN"),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    /// Anything other than a JSON number becomes the invalid amount.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::Number(n) => n.as_f64().map_or(Amount::INVALID, Amount::new),
            _ => Amount::INVALID,
        })
    }
}

/// Format a value with exactly three decimal places.
/// Rounds to nearest; a value lying exactly halfway rounds away from zero.
/// Example: 1.5 -> "1.500", 1.0625 -> "1.063", -1.0625 -> "-1.063"
pub fn format_fixed3(value: f64) -> String {
    // -0.0 prints as "0.000"
    let value = if value == 0.0 { 0.0 } else { value };
    let abs = value.abs();
    let sixteenths = abs * 16.0;

    // A decimal tie at the fourth place is only exact when the value is a
    // multiple of 1/16; otherwise the std formatter already rounds correctly.
    // Beyond u64 range every such value is an integer and cannot tie.
    if sixteenths.fract() == 0.0 && sixteenths < u64::MAX as f64 {
        // thousandths * 2 == sixteenths * 125
        let doubled = sixteenths as u128 * 125;
        if doubled % 2 == 1 {
            let rounded = (doubled + 1) / 2;
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{}.{:03}", sign, rounded / 1000, rounded % 1000);
        }
    }

    format!("{:.3}", value)
}

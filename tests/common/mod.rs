// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use saldo::Entry;

/// CPFs with valid check digits
pub const ALICE: &str = "12345678909";
pub const BOB: &str = "52998224725";
pub const CAROL: &str = "11144477735";
pub const DAVE: &str = "11111111111";

/// Build entries from (cpf, amount) pairs
pub fn entries(pairs: &[(&str, f64)]) -> Vec<Entry> {
    pairs
        .iter()
        .map(|(cpf, amount)| Entry::new(*cpf, *amount))
        .collect()
}

/// Parse entries from a JSON array, the way an upstream source hands them over
pub fn entries_from_json(json: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(json)?)
}

/// Test fixture: a small month of activity across four accounts
pub struct StandardLedger;

impl StandardLedger {
    /// Balances: ALICE 1250, BOB 14000, CAROL -300, DAVE 600
    /// Averages: ALICE 416.667, BOB 7000, CAROL -150, DAVE 600
    pub fn entries() -> Vec<Entry> {
        entries(&[
            (ALICE, 1000.0),
            (BOB, 15000.0),
            (ALICE, 500.0),
            (CAROL, -200.0),
            (DAVE, 600.0),
            (BOB, -1000.0),
            (ALICE, -250.0),
            (CAROL, -100.0),
        ])
    }
}

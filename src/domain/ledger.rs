use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Amount, Entry};

/// Net balance of one CPF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub identifier: String,
    pub amount: Amount,
}

/// Compute the net balance of every CPF present in the entries.
/// Balances come out in order of each CPF's first appearance.
pub fn balances_by_cpf(entries: &[Entry]) -> Vec<AccountBalance> {
    let mut balances: Vec<AccountBalance> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.identifier.as_str()).copied() {
            Some(i) => balances[i].amount = balances[i].amount + entry.amount,
            None => {
                index.insert(&entry.identifier, balances.len());
                balances.push(AccountBalance {
                    identifier: entry.identifier.clone(),
                    amount: entry.amount,
                });
            }
        }
    }

    tracing::trace!(
        entries = entries.len(),
        accounts = balances.len(),
        "balances computed"
    );
    balances
}

/// Smallest and largest entry booked against a CPF, as `[min, max]`.
/// A CPF with a single entry yields just that entry; an unknown CPF yields nothing.
pub fn min_max_for_cpf(identifier: &str, entries: &[Entry]) -> Vec<Entry> {
    let mut matching: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.identifier == identifier)
        .collect();

    // Stable, so equal amounts keep their input order.
    matching.sort_by(|a, b| a.amount.ranking_cmp(&b.amount));

    match matching.as_slice() {
        [] => Vec::new(),
        [only] => vec![(*only).clone()],
        [first, .., last] => vec![(*first).clone(), (*last).clone()],
    }
}

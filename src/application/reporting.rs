use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{balances_by_cpf, AccountBalance, Amount, Entry};

pub const DEFAULT_TOP_BALANCES: usize = 3;
pub const DEFAULT_TOP_AVERAGES: usize = 3;

/// Mean entry value of one CPF, already formatted with three decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageBalance {
    pub identifier: String,
    pub amount: String,
}

/// The `n` accounts with the highest net balance, highest first.
/// Accounts whose balance is invalid are left out. Equal balances keep
/// first-appearance order.
pub fn top_balances(entries: &[Entry], n: usize) -> Vec<AccountBalance> {
    let balances = balances_by_cpf(entries);
    let total = balances.len();

    let mut ranked: Vec<AccountBalance> = balances
        .into_iter()
        .filter(|b| b.amount.is_valid())
        .collect();

    if ranked.len() < total {
        tracing::debug!(
            excluded = total - ranked.len(),
            "invalid balances left out of ranking"
        );
    }

    ranked.sort_by(|a, b| a.amount.descending_cmp(&b.amount));
    ranked.truncate(n);
    ranked
}

/// The three accounts with the highest mean entry value.
pub fn top_averages(entries: &[Entry]) -> Vec<AverageBalance> {
    top_averages_n(entries, DEFAULT_TOP_AVERAGES)
}

/// The `n` accounts with the highest mean entry value, highest first.
/// Accounts whose mean is invalid rank after every valid one.
pub fn top_averages_n(entries: &[Entry], n: usize) -> Vec<AverageBalance> {
    let mut groups: Vec<(&str, Vec<Amount>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.identifier.as_str()).or_insert_with(|| {
            groups.push((entry.identifier.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(entry.amount);
    }

    let mut means: Vec<(&str, Amount)> = groups
        .into_iter()
        .map(|(identifier, amounts)| {
            let total = amounts.iter().fold(Amount::ZERO, |acc, a| acc + *a);
            (identifier, total.mean_of(amounts.len()))
        })
        .collect();

    means.sort_by(|a, b| a.1.descending_cmp(&b.1));
    means.truncate(n);

    tracing::trace!(entries = entries.len(), reported = means.len(), "averages ranked");

    means
        .into_iter()
        .map(|(identifier, mean)| AverageBalance {
            identifier: identifier.to_string(),
            amount: mean.to_fixed3(),
        })
        .collect()
}

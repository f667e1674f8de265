mod common;

use anyhow::Result;
use common::{entries, entries_from_json, StandardLedger, ALICE, BOB, CAROL, DAVE};
use saldo::{
    balances_by_cpf, min_max_for_cpf, top_averages, top_balances, AccountBalance, Amount,
    AverageBalance, Entry, SummaryConfig, SummaryService, DEFAULT_TOP_BALANCES,
};

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

#[test]
fn test_end_to_end_balance() {
    let entries = entries(&[(ALICE, 100.0), (ALICE, -50.0)]);

    assert_eq!(
        balances_by_cpf(&entries),
        vec![AccountBalance {
            identifier: ALICE.to_string(),
            amount: Amount::from(50),
        }]
    );
}

#[test]
fn test_standard_ledger_balances() {
    let balances = balances_by_cpf(&StandardLedger::entries());

    assert_eq!(
        ids(&balances, |b| &b.identifier),
        vec![ALICE, BOB, CAROL, DAVE]
    );
    let amounts: Vec<Option<f64>> = balances.iter().map(|b| b.amount.value()).collect();
    assert_eq!(
        amounts,
        vec![Some(1250.0), Some(14000.0), Some(-300.0), Some(600.0)]
    );
}

#[test]
fn test_standard_ledger_extremes() {
    let ledger = StandardLedger::entries();

    assert_eq!(
        min_max_for_cpf(ALICE, &ledger),
        vec![Entry::new(ALICE, -250), Entry::new(ALICE, 1000)]
    );
    assert_eq!(min_max_for_cpf(DAVE, &ledger), vec![Entry::new(DAVE, 600)]);
    assert!(min_max_for_cpf("99999999999", &ledger).is_empty());
}

#[test]
fn test_extremes_with_equal_amounts_keep_input_order() -> Result<()> {
    let ledger = entries_from_json(
        r#"[
            {"identifier": "12345678909", "amount": 5},
            {"identifier": "12345678909", "amount": 5},
            {"identifier": "12345678909", "amount": 5}
        ]"#,
    )?;

    let extremes = min_max_for_cpf(ALICE, &ledger);
    assert_eq!(extremes.len(), 2);
    assert_eq!(extremes[0], ledger[0]);
    assert_eq!(extremes[1], ledger[2]);
    Ok(())
}

#[test]
fn test_top_balances_default_count() {
    let top = top_balances(&StandardLedger::entries(), DEFAULT_TOP_BALANCES);

    assert_eq!(ids(&top, |b| &b.identifier), vec![BOB, ALICE, DAVE]);
    assert_eq!(top[0].amount, Amount::from(14000));
}

#[test]
fn test_top_balances_empty_and_short() {
    assert!(top_balances(&[], 3).is_empty());

    let ledger = entries(&[(ALICE, 10.0), (BOB, 20.0)]);
    let top = top_balances(&ledger, 5);
    assert_eq!(ids(&top, |b| &b.identifier), vec![BOB, ALICE]);

    assert!(top_balances(&ledger, 0).is_empty());
}

#[test]
fn test_top_balances_ties_keep_first_appearance() {
    let ledger = entries(&[(CAROL, 50.0), (ALICE, 100.0), (BOB, 50.0), (DAVE, 50.0)]);
    let top = top_balances(&ledger, 3);

    assert_eq!(ids(&top, |b| &b.identifier), vec![ALICE, CAROL, BOB]);
}

#[test]
fn test_top_balances_skip_invalid_sums() -> Result<()> {
    let ledger = entries_from_json(
        r#"[
            {"cpf": "12345678909", "valor": 9000},
            {"cpf": "12345678909", "valor": "oops"},
            {"cpf": "52998224725", "valor": 1},
            {"cpf": "11144477735", "valor": -5}
        ]"#,
    )?;

    let top = top_balances(&ledger, 3);
    assert_eq!(ids(&top, |b| &b.identifier), vec![BOB, CAROL]);
    assert!(top.iter().all(|b| b.amount.is_valid()));
    Ok(())
}

#[test]
fn test_top_averages_format() {
    let ledger = entries(&[("A", 1.0), ("A", 2.0)]);

    assert_eq!(
        top_averages(&ledger),
        vec![AverageBalance {
            identifier: "A".to_string(),
            amount: "1.500".to_string(),
        }]
    );
}

#[test]
fn test_top_averages_standard_ledger() {
    let top = top_averages(&StandardLedger::entries());

    assert_eq!(
        top,
        vec![
            AverageBalance {
                identifier: BOB.to_string(),
                amount: "7000.000".to_string(),
            },
            AverageBalance {
                identifier: DAVE.to_string(),
                amount: "600.000".to_string(),
            },
            AverageBalance {
                identifier: ALICE.to_string(),
                amount: "416.667".to_string(),
            },
        ]
    );
}

#[test]
fn test_top_averages_always_three_decimals() {
    let ledger = entries(&[
        (ALICE, 0.1),
        (ALICE, 0.2),
        (BOB, -1.0),
        (BOB, -0.0625),
        (CAROL, 10.0),
        (CAROL, 10.0),
        (CAROL, 11.0),
    ]);

    for average in top_averages(&ledger) {
        let (_, decimals) = average.amount.split_once('.').unwrap();
        assert_eq!(decimals.len(), 3, "{}", average.amount);
    }
}

#[test]
fn test_top_averages_ties_keep_first_appearance() {
    let ledger = entries(&[
        ("C", 5.0),
        ("A", 2.0),
        ("A", 8.0),
        ("B", 5.0),
        ("D", 5.0),
    ]);

    let top = top_averages(&ledger);
    assert_eq!(ids(&top, |a| &a.identifier), vec!["C", "A", "B"]);
    assert!(top.iter().all(|a| a.amount == "5.000"));
}

#[test]
fn test_top_averages_empty() {
    assert!(top_averages(&[]).is_empty());
}

#[test]
fn test_top_averages_rank_invalid_last() -> Result<()> {
    let ledger = entries_from_json(
        r#"[
            {"cpf": "12345678909", "valor": "x"},
            {"cpf": "52998224725", "valor": -10}
        ]"#,
    )?;

    let top = top_averages(&ledger);
    assert_eq!(top[0].identifier, BOB);
    assert_eq!(top[0].amount, "-10.000");
    assert_eq!(top[1].identifier, ALICE);
    assert_eq!(top[1].amount, "NaN");
    Ok(())
}

#[test]
fn test_reports_through_service() -> Result<()> {
    let config = SummaryConfig {
        top_balances: 1,
        top_averages: 2,
        ..SummaryConfig::default()
    };
    let service = SummaryService::new(config)?;
    let ledger = StandardLedger::entries();

    assert_eq!(service.balances(&ledger), balances_by_cpf(&ledger));
    assert_eq!(service.extremes(BOB, &ledger), min_max_for_cpf(BOB, &ledger));
    assert_eq!(ids(&service.top_balances(&ledger), |b| &b.identifier), vec![BOB]);
    assert_eq!(
        ids(&service.top_averages(&ledger), |a| &a.identifier),
        vec![BOB, DAVE]
    );
    Ok(())
}

#[test]
fn test_reports_serialize() -> Result<()> {
    let ledger = entries(&[(ALICE, 100.0), (ALICE, -50.0)]);

    let json = serde_json::to_string(&balances_by_cpf(&ledger))?;
    assert_eq!(json, r#"[{"identifier":"12345678909","amount":50.0}]"#);

    let json = serde_json::to_string(&top_averages(&ledger))?;
    assert_eq!(json, r#"[{"identifier":"12345678909","amount":"25.000"}]"#);
    Ok(())
}

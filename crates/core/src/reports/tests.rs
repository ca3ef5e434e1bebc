//! Report tests: worked examples and property-based checks.

use chrono::{Days, NaiveDate};
use farmbook_shared::types::EntryId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{IntegrityError, ReportError};
use super::range::DateRange;
use super::service::ReportService;
use super::types::{CashDirection, NetOutcome};
use crate::catalog::AccountCatalog;
use crate::catalog::farm::{farm_accounts, names};
use crate::journal::{EntryDraft, JournalEntry, Line, validate};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
    DateRange::new(from, to).unwrap()
}

fn february() -> DateRange {
    range(date(2, 1), date(2, 28))
}

/// Entry built without validation, so tests can model corrupted files.
fn raw(on: NaiveDate, description: &str, lines: Vec<Line>) -> JournalEntry {
    JournalEntry {
        id: EntryId::new(),
        date: on,
        description: description.to_string(),
        lines,
    }
}

fn transfer(on: NaiveDate, debit: &str, credit: &str, amount: Decimal) -> JournalEntry {
    raw(
        on,
        "transaksi",
        vec![Line::debit(debit, amount), Line::credit(credit, amount)],
    )
}

fn farm() -> AccountCatalog {
    AccountCatalog::farm().unwrap()
}

// ============================================================================
// Account ledger
// ============================================================================

#[test]
fn test_ledger_running_balance_in_date_order() {
    let catalog = farm();
    let entries = vec![
        transfer(date(2, 20), names::BIAYA_PAKAN, names::KAS, dec!(200)),
        transfer(date(2, 5), names::KAS, names::PENJUALAN_SUSU, dec!(1000)),
        transfer(date(2, 20), names::KAS, names::PENJUALAN_SUSU, dec!(50)),
        transfer(date(3, 1), names::KAS, names::PENJUALAN_SUSU, dec!(999)),
    ];

    let report = ReportService::new(&catalog, &entries)
        .account_ledger(names::KAS, february())
        .unwrap();

    let ids: Vec<_> = report.rows.iter().map(|r| r.entry_id).collect();
    assert_eq!(ids, vec![entries[1].id, entries[0].id, entries[2].id]);

    let balances: Vec<_> = report.rows.iter().map(|r| r.balance).collect();
    assert_eq!(balances, vec![dec!(1000), dec!(800), dec!(850)]);
    assert_eq!(report.total_debit, dec!(1050));
    assert_eq!(report.total_credit, dec!(200));
    assert_eq!(report.closing_balance, dec!(850));
}

#[test]
fn test_ledger_no_movement() {
    let catalog = farm();
    let entries = vec![
        transfer(date(2, 5), names::KAS, names::PENJUALAN_SUSU, dec!(1000)),
        transfer(date(3, 5), names::BANK, names::PENJUALAN_SUSU, dec!(1000)),
    ];
    let reports = ReportService::new(&catalog, &entries);

    assert_eq!(
        reports.account_ledger(names::BANK, february()).unwrap_err(),
        ReportError::NoMovement {
            account: names::BANK.to_string()
        }
    );
    assert!(matches!(
        reports.account_ledger(names::HUTANG, february()),
        Err(ReportError::NoMovement { .. })
    ));
}

// ============================================================================
// Trial balance
// ============================================================================

#[test]
fn test_trial_balance_columns_and_stable_universe() {
    let catalog = farm();
    let entries = vec![
        transfer(date(1, 10), names::PERSEDIAAN, names::HUTANG, dec!(700)),
        transfer(date(2, 5), names::KAS, names::PENJUALAN_SUSU, dec!(1000)),
        transfer(date(2, 6), names::BIAYA_PAKAN, names::KAS, dec!(400)),
    ];

    let report = ReportService::new(&catalog, &entries)
        .trial_balance(february())
        .unwrap();

    let accounts: Vec<_> = report.rows.iter().map(|r| r.account.as_str()).collect();
    assert_eq!(
        accounts,
        vec![
            names::BIAYA_PAKAN,
            names::HUTANG,
            names::KAS,
            names::PENJUALAN_SUSU,
            names::PERSEDIAAN,
        ]
    );

    let hutang = &report.rows[1];
    assert_eq!(hutang.debit_balance, Decimal::ZERO);
    assert_eq!(hutang.credit_balance, Decimal::ZERO);

    let kas = &report.rows[2];
    assert_eq!(kas.debit_balance, dec!(600));
    assert_eq!(kas.credit_balance, Decimal::ZERO);

    let penjualan = &report.rows[3];
    assert_eq!(penjualan.credit_balance, dec!(1000));

    assert_eq!(report.totals.total_debit, dec!(1000));
    assert_eq!(report.totals.total_credit, dec!(1000));
    assert!(report.totals.is_balanced);
    assert!(report.check_integrity().is_ok());
}

#[test]
fn test_trial_balance_flags_corrupted_data() {
    let catalog = farm();
    let entries = vec![raw(
        date(2, 5),
        "rusak",
        vec![
            Line::debit(names::KAS, dec!(100)),
            Line::credit(names::PENJUALAN_SUSU, dec!(90)),
        ],
    )];

    let report = ReportService::new(&catalog, &entries)
        .trial_balance(february())
        .unwrap();

    assert!(!report.totals.is_balanced);
    assert_eq!(
        report.check_integrity().unwrap_err(),
        IntegrityError::TrialBalanceUnbalanced {
            total_debit: dec!(100),
            total_credit: dec!(90),
        }
    );
}

#[test]
fn test_admitted_rounding_gaps_accumulate_within_allowance() {
    let catalog = farm();
    let milk_sale = || {
        let draft = EntryDraft::new(
            date(2, 10),
            "Penjualan susu",
            vec![
                Line::debit(names::KAS, dec!(100.01)),
                Line::credit(names::PENJUALAN_SUSU, dec!(100.00)),
            ],
        );
        validate(draft).unwrap().into_entry(EntryId::new())
    };
    let entries = vec![milk_sale(), milk_sale()];
    let reports = ReportService::new(&catalog, &entries);

    let trial = reports.trial_balance(february()).unwrap();
    assert_eq!(trial.totals.total_debit, dec!(200.02));
    assert_eq!(trial.totals.total_credit, dec!(200.00));
    assert!(trial.totals.is_balanced);
    assert!(trial.check_integrity().is_ok());

    let cash = reports.cash_flow(february()).unwrap();
    assert_eq!(cash.net_cash_change, dec!(200.00));
    assert_eq!(cash.direct_cash_change, dec!(200.02));
    assert!(cash.reconciliation.is_reconciled);
    assert!(cash.check_integrity().is_ok());
}

#[test]
fn test_reports_on_empty_journal() {
    let catalog = farm();
    let reports = ReportService::new(&catalog, &[]);

    assert_eq!(reports.trial_balance(february()).unwrap_err(), ReportError::NoData);
    assert_eq!(reports.income_statement(february()).unwrap_err(), ReportError::NoData);
    assert_eq!(reports.cash_flow(february()).unwrap_err(), ReportError::NoData);
}

// ============================================================================
// Income statement
// ============================================================================

#[test]
fn test_income_statement_revenue_and_expense() {
    let catalog = farm();
    let entries = vec![
        transfer(date(2, 3), names::KAS, names::PENJUALAN_SUSU, dec!(500000)),
        transfer(date(2, 4), names::BIAYA_PAKAN, names::KAS, dec!(200000)),
    ];

    let report = ReportService::new(&catalog, &entries)
        .income_statement(february())
        .unwrap();

    assert_eq!(report.revenue.total, dec!(500000));
    assert_eq!(report.cost_of_goods_sold, Decimal::ZERO);
    assert_eq!(report.gross_profit, dec!(500000));
    assert_eq!(report.expenses.total, dec!(200000));
    assert_eq!(report.net_result, dec!(300000));
    assert_eq!(report.outcome, NetOutcome::NetIncome);

    assert_eq!(report.revenue.lines.len(), 4);
    assert_eq!(report.expenses.lines.len(), 8);
    assert_eq!(report.expenses.lines[0].account, names::BIAYA_PAKAN);
    assert_eq!(report.expenses.lines[0].amount, dec!(200000));
}

#[test]
fn test_income_statement_inventory_adjustment() {
    let catalog = farm();
    let entries = vec![
        transfer(date(1, 10), names::PERSEDIAAN, names::KAS, dec!(100)),
        transfer(date(2, 2), names::BEBAN_POKOK_PENDAPATAN, names::KAS, dec!(300)),
        transfer(date(2, 10), names::PERSEDIAAN, names::KAS, dec!(50)),
        transfer(date(2, 12), names::KAS, names::PENJUALAN_SUSU, dec!(1000)),
        transfer(date(3, 1), names::PERSEDIAAN, names::KAS, dec!(999)),
    ];

    let report = ReportService::new(&catalog, &entries)
        .income_statement(february())
        .unwrap();

    assert_eq!(report.beginning_inventory, dec!(100));
    assert_eq!(report.ending_inventory, dec!(150));
    assert_eq!(report.cost_of_goods_purchased, dec!(300));
    assert_eq!(report.cost_of_goods_sold, dec!(250));
    assert_eq!(report.gross_profit, dec!(750));
    assert_eq!(report.net_result, dec!(750));
}

#[test]
fn test_income_statement_net_loss() {
    let catalog = farm();
    let entries = vec![transfer(date(2, 4), names::BIAYA_LISTRIK, names::BANK, dec!(75000))];

    let report = ReportService::new(&catalog, &entries)
        .income_statement(february())
        .unwrap();

    assert_eq!(report.net_result, dec!(-75000));
    assert_eq!(report.outcome, NetOutcome::NetLoss);
}

#[test]
fn test_share_issuance_counts_as_revenue() {
    let catalog = farm();
    let entries = vec![transfer(
        date(2, 1),
        names::KAS,
        names::PENDAPATAN_SAHAM,
        dec!(1000000),
    )];

    let report = ReportService::new(&catalog, &entries)
        .income_statement(february())
        .unwrap();
    let shares = report
        .revenue
        .lines
        .iter()
        .find(|l| l.account == names::PENDAPATAN_SAHAM)
        .unwrap();
    assert_eq!(shares.amount, dec!(1000000));
    assert_eq!(report.revenue.total, dec!(1000000));
    assert_eq!(report.net_result, dec!(1000000));
    assert_eq!(report.outcome, NetOutcome::NetIncome);
}

// ============================================================================
// Cash flow
// ============================================================================

#[test]
fn test_cash_flow_financing_share_issuance() {
    let catalog = farm();
    let entries = vec![transfer(
        date(2, 1),
        names::KAS,
        names::PENDAPATAN_SAHAM,
        dec!(1000000),
    )];

    let report = ReportService::new(&catalog, &entries)
        .cash_flow(february())
        .unwrap();

    assert_eq!(report.financing.total, dec!(1000000));
    assert_eq!(report.financing.categories[0].label, "Penerbitan Saham Biasa");
    assert_eq!(report.financing.categories[0].amount, dec!(1000000));
    assert!(report.financing.categories[0].has_activity);
    assert!(!report.financing.categories[1].has_activity);
    assert_eq!(report.financing.direction, CashDirection::Received);

    assert_eq!(report.operating.total, Decimal::ZERO);
    assert!(!report.operating.has_activity);
    assert_eq!(report.investing.total, Decimal::ZERO);

    assert_eq!(report.beginning_cash, Decimal::ZERO);
    assert_eq!(report.ending_cash, dec!(1000000));
    assert!(report.reconciliation.is_reconciled);
    assert!(report.check_integrity().is_ok());
}

#[test]
fn test_cash_flow_equipment_sale_counted_once() {
    let catalog = farm();
    let entries = vec![
        transfer(date(1, 5), names::KAS, names::PENDAPATAN_SAHAM, dec!(10000)),
        transfer(date(2, 7), names::BANK, names::PENJUALAN_PERLENGKAPAN, dec!(5000)),
        transfer(date(2, 8), names::PEMBELIAN_TANAH, names::KAS, dec!(8000)),
        transfer(date(2, 9), names::KAS, names::PENJUALAN_SUSU, dec!(1200)),
        transfer(date(2, 9), names::BIAYA_PAKAN, names::KAS, dec!(300)),
    ];

    let report = ReportService::new(&catalog, &entries)
        .cash_flow(february())
        .unwrap();

    assert_eq!(report.operating.total, dec!(900));
    assert_eq!(report.investing.total, dec!(-3000));
    assert_eq!(report.investing.direction, CashDirection::Used);
    assert_eq!(report.financing.total, Decimal::ZERO);
    assert_eq!(report.net_cash_change, dec!(-2100));

    assert_eq!(report.beginning_cash, dec!(10000));
    assert_eq!(report.ending_cash, dec!(7900));
    assert_eq!(report.direct_cash_change, dec!(-2100));
    assert!(report.reconciliation.is_reconciled);
}

#[test]
fn test_cash_flow_mismatch_reported_not_corrected() {
    let catalog = farm();
    let entries = vec![transfer(date(2, 3), names::KAS, "Akun Lama", dec!(100))];

    let report = ReportService::new(&catalog, &entries)
        .cash_flow(february())
        .unwrap();

    assert_eq!(report.net_cash_change, Decimal::ZERO);
    assert_eq!(report.direct_cash_change, dec!(100));
    assert_eq!(report.reconciliation.difference, dec!(-100));
    assert!(!report.reconciliation.is_reconciled);
    assert_eq!(
        report.check_integrity().unwrap_err(),
        IntegrityError::CashFlowMismatch {
            activities: Decimal::ZERO,
            direct: dec!(100),
        }
    );
}

// ============================================================================
// Properties
// ============================================================================

fn catalog_account() -> impl Strategy<Value = String> {
    let names: Vec<String> = farm_accounts().into_iter().map(|a| a.name).collect();
    prop::sample::select(names)
}

/// A validated entry of two or three lines within Jan-Apr 2026.
fn validated_entry() -> impl Strategy<Value = JournalEntry> {
    (
        0u64..120,
        catalog_account(),
        catalog_account(),
        catalog_account(),
        1i64..10_000_000,
        0i64..=100,
    )
        .prop_map(|(offset, debit, credit, rest, cents, split)| {
            let amount = Decimal::new(cents, 2);
            let first = (amount * Decimal::new(split, 2)).round_dp(2);
            let draft = EntryDraft::new(
                date(1, 1) + Days::new(offset),
                "prop",
                vec![
                    Line::debit(debit, amount),
                    Line::credit(credit, first),
                    Line::credit(rest, amount - first),
                ],
            );
            validate(draft).unwrap().into_entry(EntryId::new())
        })
}

/// A validated two-line entry whose sides differ by up to one cent.
fn near_balanced_entry() -> impl Strategy<Value = JournalEntry> {
    (0u64..120, catalog_account(), 1i64..10_000_000, 0i64..=1, any::<bool>()).prop_map(
        |(offset, credit, cents, gap, debit_heavy)| {
            let amount = Decimal::new(cents, 2);
            let skewed = amount + Decimal::new(gap, 2);
            let (debit_amount, credit_amount) = if debit_heavy {
                (skewed, amount)
            } else {
                (amount, skewed)
            };
            let draft = EntryDraft::new(
                date(1, 1) + Days::new(offset),
                "prop",
                vec![
                    Line::debit(names::KAS, debit_amount),
                    Line::credit(credit, credit_amount),
                ],
            );
            validate(draft).unwrap().into_entry(EntryId::new())
        },
    )
}

fn any_range() -> impl Strategy<Value = DateRange> {
    (0u64..120, 0u64..120).prop_map(|(a, b)| {
        let start = date(1, 1) + Days::new(a.min(b));
        let end = date(1, 1) + Days::new(a.max(b));
        range(start, end)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A journal of validated entries always yields a balanced trial balance.
    #[test]
    fn prop_trial_balance_balanced(
        entries in prop::collection::vec(validated_entry(), 1..30),
        period in any_range(),
    ) {
        let catalog = farm();
        let report = ReportService::new(&catalog, &entries).trial_balance(period).unwrap();
        prop_assert!(report.totals.is_balanced);
        prop_assert_eq!(report.totals.total_debit, report.totals.total_credit);
    }

    /// The closing ledger balance equals the cumulative debit minus credit in range.
    #[test]
    fn prop_ledger_closing_balance(
        entries in prop::collection::vec(validated_entry(), 1..30),
        period in any_range(),
    ) {
        let catalog = farm();
        let expected: Decimal = entries
            .iter()
            .filter(|e| period.contains(e.date))
            .flat_map(|e| e.lines_for(names::KAS))
            .map(Line::net_debit)
            .sum();

        match ReportService::new(&catalog, &entries).account_ledger(names::KAS, period) {
            Ok(report) => {
                prop_assert_eq!(report.closing_balance, expected);
                let dates: Vec<_> = report.rows.iter().map(|r| r.date).collect();
                prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
            }
            Err(err) => prop_assert_eq!(err, ReportError::NoMovement { account: names::KAS.to_string() }),
        }
    }

    /// With every account in the catalog, activity totals explain the cash change.
    #[test]
    fn prop_cash_flow_reconciles(
        entries in prop::collection::vec(validated_entry(), 1..30),
        period in any_range(),
    ) {
        let catalog = farm();
        let report = ReportService::new(&catalog, &entries).cash_flow(period).unwrap();
        prop_assert_eq!(report.net_cash_change, report.direct_cash_change);
        prop_assert!(report.reconciliation.is_reconciled);
    }

    /// Entries admitted with a rounding gap never trip the integrity checks.
    #[test]
    fn prop_admitted_gaps_pass_integrity(
        entries in prop::collection::vec(near_balanced_entry(), 1..30),
        period in any_range(),
    ) {
        let catalog = farm();
        let reports = ReportService::new(&catalog, &entries);
        prop_assert!(reports.trial_balance(period).unwrap().check_integrity().is_ok());
        prop_assert!(reports.cash_flow(period).unwrap().check_integrity().is_ok());
    }
}

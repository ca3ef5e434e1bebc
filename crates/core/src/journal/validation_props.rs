//! Property-based tests for journal entry validation rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{EntryDraft, Line};
use super::validation::{BALANCE_TOLERANCE, validate};

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // Generate amounts from 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a line that is a debit, a credit, or empty.
fn any_line() -> impl Strategy<Value = Line> {
    let account = prop_oneof![
        Just("Kas"),
        Just("Bank"),
        Just("Penjualan Susu"),
        Just("Biaya Pakan"),
    ];
    let amount = prop_oneof![Just(Decimal::ZERO), positive_amount()];
    (account, amount, any::<bool>()).prop_map(|(account, amount, is_debit)| {
        if is_debit {
            Line::debit(account, amount)
        } else {
            Line::credit(account, amount)
        }
    })
}

fn draft(lines: Vec<Line>) -> EntryDraft {
    EntryDraft::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), "prop", lines)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every admitted entry balances within tolerance, has at least two lines,
    /// and contains no empty line.
    #[test]
    fn prop_validated_entries_balance(lines in prop::collection::vec(any_line(), 0..8)) {
        if let Ok(validated) = validate(draft(lines)) {
            let debit: Decimal = validated.lines().iter().map(|l| l.debit).sum();
            let credit: Decimal = validated.lines().iter().map(|l| l.credit).sum();
            prop_assert!((debit - credit).abs() <= BALANCE_TOLERANCE);
            prop_assert!(validated.lines().len() >= 2);
            prop_assert!(validated.lines().iter().all(|l| !l.is_empty()));
        }
    }

    /// A two-sided entry with equal sides is always admitted unchanged.
    #[test]
    fn prop_equal_sides_accepted(amount in positive_amount()) {
        let lines = vec![Line::debit("Kas", amount), Line::credit("Penjualan Susu", amount)];
        let validated = validate(draft(lines.clone()));
        prop_assert!(validated.is_ok());
        let validated = validated.unwrap();
        prop_assert_eq!(validated.lines(), lines.as_slice());
    }

    /// A line with both sides filled is always rejected as mixed sign.
    #[test]
    fn prop_mixed_sign_rejected(debit in positive_amount(), credit in positive_amount()) {
        let lines = vec![
            Line { account: "Kas".to_string(), debit, credit },
            Line::credit("Penjualan Susu", debit),
        ];
        prop_assert_eq!(
            validate(draft(lines)).unwrap_err(),
            ValidationError::MixedSign { line: 1 }
        );
    }

    /// Sides differing by more than the tolerance are always rejected.
    #[test]
    fn prop_unbalanced_rejected(amount in positive_amount(), gap in 2i64..1_000_000i64) {
        let credit = amount + Decimal::new(gap, 2);
        let lines = vec![Line::debit("Kas", amount), Line::credit("Penjualan Susu", credit)];
        let is_unbalanced = matches!(
            validate(draft(lines)),
            Err(ValidationError::Unbalanced { .. })
        );
        prop_assert!(is_unbalanced);
    }
}

//! Business rule validation for journal entries.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{EntryDraft, Line, ValidatedEntry};
use crate::catalog::AccountCatalog;

/// Absolute tolerance, in currency units, for debit/credit equality.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Returns true if two totals agree within `BALANCE_TOLERANCE`.
#[must_use]
pub fn within_tolerance(left: Decimal, right: Decimal) -> bool {
    (left - right).abs() <= BALANCE_TOLERANCE
}

/// Validates a candidate entry.
///
/// Rules, in order:
/// 1. No line may carry a negative amount or both a debit and a credit.
/// 2. Lines with both amounts zero are dropped.
/// 3. At least one nonzero line must remain, and at least two overall.
/// 4. Total debit and total credit must agree within `BALANCE_TOLERANCE`.
///
/// Amounts are never rounded. The description is trimmed.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn validate(draft: EntryDraft) -> Result<ValidatedEntry, ValidationError> {
    for (index, line) in draft.lines.iter().enumerate() {
        if line.debit < Decimal::ZERO || line.credit < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount { line: index + 1 });
        }
        if line.debit > Decimal::ZERO && line.credit > Decimal::ZERO {
            return Err(ValidationError::MixedSign { line: index + 1 });
        }
    }

    let lines: Vec<Line> = draft.lines.into_iter().filter(|l| !l.is_empty()).collect();

    if lines.is_empty() {
        return Err(ValidationError::EmptyAmounts);
    }
    if lines.len() < 2 {
        return Err(ValidationError::TooFewLines { count: lines.len() });
    }

    let debit: Decimal = lines.iter().map(|l| l.debit).sum();
    let credit: Decimal = lines.iter().map(|l| l.credit).sum();
    if !within_tolerance(debit, credit) {
        return Err(ValidationError::Unbalanced { debit, credit });
    }

    Ok(ValidatedEntry {
        date: draft.date,
        description: draft.description.trim().to_string(),
        lines,
    })
}

/// Checks that every line of a validated entry names a catalog account.
///
/// # Errors
///
/// Returns `ValidationError::UnknownAccount` for the first unrecognized name.
pub fn validate_accounts(
    catalog: &AccountCatalog,
    entry: &ValidatedEntry,
) -> Result<(), ValidationError> {
    match entry.lines.iter().find(|l| !catalog.contains(&l.account)) {
        Some(line) => Err(ValidationError::UnknownAccount(line.account.clone())),
        None => Ok(()),
    }
}

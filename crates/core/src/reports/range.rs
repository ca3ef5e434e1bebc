//! Inclusive reporting period.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::ReportError;

/// Inclusive date range with `from <= to`.
///
/// Every report filters entries through these predicates so the range
/// semantics stay identical across reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ReportError> {
        if from > to {
            return Err(ReportError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// First day of the range.
    #[must_use]
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range.
    #[must_use]
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// `from <= date <= to`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// `date < from`. Selects the opening balance.
    #[must_use]
    pub fn is_before_start(&self, date: NaiveDate) -> bool {
        date < self.from
    }

    /// `date <= to`. Selects the closing balance.
    #[must_use]
    pub fn is_on_or_before_end(&self, date: NaiveDate) -> bool {
        date <= self.to
    }
}

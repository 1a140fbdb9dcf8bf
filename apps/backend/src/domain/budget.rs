//! Budget totals for the dashboard.

use crate::errors::domain::{DomainError, InfraErrorKind};

/// `paid_by` value for money that is budgeted but not yet spent.
pub const PLANNED: &str = "planned";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total: i64,
    pub spent: i64,
    pub remaining: i64,
}

impl BudgetSummary {
    /// Totals over every `(amount, paid_by)` pair given. Callers pass all of a
    /// couple's items, not a page of them.
    ///
    /// Stored amounts are capped on input, so a sum outside `i64` means the
    /// rows did not come through the API.
    pub fn from_items<'a, I>(items: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (i64, &'a str)>,
    {
        let mut total = 0i64;
        let mut spent = 0i64;
        for (amount, paid_by) in items {
            total = total.checked_add(amount).ok_or_else(out_of_range)?;
            if paid_by != PLANNED {
                spent = spent.checked_add(amount).ok_or_else(out_of_range)?;
            }
        }

        Ok(Self {
            total,
            spent,
            remaining: total.checked_sub(spent).ok_or_else(out_of_range)?,
        })
    }
}

fn out_of_range() -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        "Budget totals exceed the supported range",
    )
}

use crate::common::{Error, Result};
use crate::transaction::Transaction;

/// Two amounts closer than this are considered equal.
pub(crate) const AMOUNT_TOLERANCE: f64 = 0.01;

/// Matches transactions whose amount equals the threshold.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AmountFilter {
    amount: f64,
}

impl AmountFilter {
    pub(crate) fn new(amount: f64) -> Result<AmountFilter> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::invalid_argument("Invalid amount filter"));
        }
        Ok(AmountFilter { amount })
    }

    pub(crate) fn amount(&self) -> f64 {
        self.amount
    }

    pub(crate) fn matches(&self, t: &Transaction) -> bool {
        (t.amount() - self.amount).abs() < AMOUNT_TOLERANCE
    }
}

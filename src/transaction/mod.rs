pub(crate) mod validation;

use chrono::{Local, NaiveDateTime, ParseResult, Timelike};
use crate::common::{Error, Result};

/// Format used to display and re-parse transaction timestamps.
pub(crate) const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

const INVALID_AMOUNT: &str = "The amount is not valid.";
const INVALID_CATEGORY: &str = "The category is not valid.";

/// A single recorded expense. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    amount: f64,
    category: String,
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Validate the inputs and stamp the transaction with the current local time.
    pub(crate) fn new(amount: f64, category: &str) -> Result<Transaction> {
        if !validation::is_valid_amount(amount) {
            return Err(Error::invalid_argument(INVALID_AMOUNT));
        }
        if !validation::is_valid_category(category) {
            return Err(Error::invalid_argument(INVALID_CATEGORY));
        }

        Ok(Transaction {
            amount,
            category: category.to_string(),
            timestamp: now(),
        })
    }

    pub(crate) fn amount(&self) -> f64 {
        self.amount
    }

    pub(crate) fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub(crate) fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Parse a string produced by [`Transaction::timestamp_display`].
pub(crate) fn parse_timestamp(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}

// Truncated to whole seconds so the displayed form round-trips exactly.
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use super::*;

    fn check_transaction(amount: f64, category: &str, t: &Transaction) {
        assert!((t.amount() - amount).abs() < 0.01);
        assert_eq!(t.category(), category);

        let parsed = parse_timestamp(&t.timestamp_display()).unwrap();
        assert_eq!(parsed, t.timestamp());
        let elapsed = Local::now().naive_local() - parsed;
        assert!(elapsed < Duration::seconds(60));
    }

    #[test]
    fn test_new_transaction() {
        let t = Transaction::new(50.0, "food").unwrap();
        check_transaction(50.0, "food", &t);

        let t = Transaction::new(1000.0, "bills").unwrap();
        check_transaction(1000.0, "bills", &t);
    }

    #[test]
    fn test_invalid_amount() {
        for amount in [-50.0, 1001.0, 0.0] {
            let result = Transaction::new(amount, "food");
            assert_eq!(result, Err(Error::InvalidArgument("The amount is not valid.".to_string())));
        }
    }

    #[test]
    fn test_invalid_category() {
        for category in [" ", "0123", "", "food2"] {
            let err = Transaction::new(50.0, category).unwrap_err();
            assert_eq!(err.to_string(), "The category is not valid.");
        }
    }

    #[test]
    fn test_amount_checked_first() {
        let err = Transaction::new(0.0, "0123").unwrap_err();
        assert_eq!(err.to_string(), "The amount is not valid.");
    }
}

mod amount;
mod category;

use std::fmt;
use crate::transaction::Transaction;

pub(crate) use amount::AmountFilter;
pub(crate) use category::CategoryFilter;

/// A criterion used to pick out transactions for highlighting.
/// Applying a filter never touches the list it is given.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Filter {
    Amount(AmountFilter),
    Category(CategoryFilter),
}

impl Filter {
    pub(crate) fn matches(&self, t: &Transaction) -> bool {
        match self {
            Filter::Amount(f) => f.matches(t),
            Filter::Category(f) => f.matches(t),
        }
    }

    /// Returns the matching transactions, in their original order.
    pub(crate) fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }

    /// Returns the positions of the matching transactions.
    pub(crate) fn matching_rows(&self, transactions: &[Transaction]) -> Vec<usize> {
        transactions.iter()
            .enumerate()
            .filter(|(_, t)| self.matches(t))
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<AmountFilter> for Filter {
    fn from(f: AmountFilter) -> Self {
        Filter::Amount(f)
    }
}

impl From<CategoryFilter> for Filter {
    fn from(f: CategoryFilter) -> Self {
        Filter::Category(f)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Filter::Amount(a) => write!(f, "amount = {:.2}", a.amount()),
            Filter::Category(c) => write!(f, "category = {}", c.category()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transactions(entries: &[(f64, &str)]) -> Vec<Transaction> {
        entries.iter().map(|(amount, category)| Transaction::new(*amount, category).unwrap()).collect()
    }

    #[test]
    fn test_amount_filter() {
        let list = transactions(&[(100.0, "food"), (200.0, "food"), (100.0, "food"), (500.0, "food"), (100.0, "food")]);
        let filter: Filter = AmountFilter::new(100.0).unwrap().into();

        assert_eq!(filter.matching_rows(&list), vec![0, 2, 4]);
        let matched = filter.apply(&list);
        assert_eq!(matched.len(), 3);
        assert!(std::ptr::eq(matched[1], &list[2]));
        // input untouched
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_category_filter() {
        let list = transactions(&[(100.0, "food"), (100.0, "other"), (100.0, "food"), (100.0, "food"), (100.0, "entertainment")]);
        let filter: Filter = CategoryFilter::new("food").unwrap().into();

        assert_eq!(filter.matching_rows(&list), vec![0, 2, 3]);
        assert!(filter.apply(&list).iter().all(|t| t.category() == "food"));
    }

    #[test]
    fn test_no_match() {
        let list = transactions(&[(10.0, "food")]);
        let filter: Filter = CategoryFilter::new("bills").unwrap().into();
        assert!(filter.apply(&list).is_empty());
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn test_display() {
        let filter: Filter = AmountFilter::new(12.5).unwrap().into();
        assert_eq!(filter.to_string(), "amount = 12.50");
    }
}

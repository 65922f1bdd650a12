use log::debug;
use crate::transaction::Transaction;

/// Ordered list of all tracked transactions. Insertion order is display order.
#[derive(Debug, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub(crate) fn new() -> TransactionStore {
        TransactionStore { transactions: vec![] }
    }

    pub(crate) fn add(&mut self, t: Transaction) {
        debug!("Adding transaction {:?}", t);
        self.transactions.push(t);
    }

    /// Remove the first transaction equal to `t`. Returns false if there was none.
    pub(crate) fn remove(&mut self, t: &Transaction) -> bool {
        match self.transactions.iter().position(|existing| existing == t) {
            Some(index) => {
                self.transactions.remove(index);
                true
            },
            None => false
        }
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Transaction> {
        if index < self.transactions.len() {
            Some(self.transactions.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn total_cost(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount()).fold(0.0, |total, amount| total + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_transaction() {
        let mut store = TransactionStore::new();
        assert!(store.is_empty());

        store.add(Transaction::new(50.0, "food").unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(store.transactions()[0].category(), "food");
        assert!((store.total_cost() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_add_then_remove() {
        let mut store = TransactionStore::new();
        store.add(Transaction::new(20.0, "bills").unwrap());
        let before = (store.len(), store.total_cost());

        let t = Transaction::new(50.0, "food").unwrap();
        store.add(t.clone());
        assert_eq!(store.len(), 2);

        assert!(store.remove(&t));
        assert_eq!((store.len(), store.total_cost()), before);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = TransactionStore::new();
        store.add(Transaction::new(20.0, "bills").unwrap());

        let other = Transaction::new(30.0, "food").unwrap();
        assert!(!store.remove(&other));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = TransactionStore::new();
        let t = Transaction::new(10.0, "food").unwrap();
        store.add(t.clone());
        store.add(t.clone());
        assert_eq!(store.len(), 2);

        store.remove(&t);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_at() {
        let mut store = TransactionStore::new();
        store.add(Transaction::new(10.0, "food").unwrap());
        store.add(Transaction::new(20.0, "other").unwrap());

        assert!(store.remove_at(2).is_none());
        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.category(), "food");
        assert_eq!(store.transactions()[0].category(), "other");
    }
}


use log::{info, warn};
use crate::common::{Error, Result};
use crate::filter::Filter;
use crate::store::TransactionStore;
use crate::transaction::Transaction;

/// Receives updates from the controller so a front end can keep its rows in step with the store.
pub(crate) trait DisplaySink {
    /// A transaction was appended as the last data row.
    fn on_transaction_added(&mut self, t: &Transaction, total_cost: f64);

    /// The data row at `index` was removed.
    fn on_transaction_removed(&mut self, index: usize, total_cost: f64);

    /// `rows` are the data rows matching the active filter; every other row is unmatched.
    fn on_filter_result(&mut self, rows: &[usize]);
}

pub(crate) struct Controller<S: DisplaySink> {
    store: TransactionStore,
    sink: S,
    filter: Option<Filter>,

    /// Optional allow-list of categories, compared case-insensitively
    allowed_categories: Option<Vec<String>>,
}

impl<S: DisplaySink> Controller<S> {
    pub(crate) fn new(store: TransactionStore, sink: S) -> Controller<S> {
        Controller {
            store,
            sink,
            filter: None,
            allowed_categories: None,
        }
    }

    pub(crate) fn with_allowed_categories(mut self, categories: Option<Vec<String>>) -> Controller<S> {
        self.allowed_categories = categories;
        self
    }

    /// Validate and record a new transaction. Returns false, leaving everything untouched, if
    /// the amount or category is rejected.
    pub(crate) fn add_transaction(&mut self, amount: f64, category: &str) -> bool {
        if !self.is_allowed_category(category) {
            warn!("Category '{}' is not in the configured category list", category);
            return false;
        }

        match Transaction::new(amount, category) {
            Ok(t) => {
                info!("Added transaction {:.2} {}", t.amount(), t.category());
                self.store.add(t.clone());
                self.sink.on_transaction_added(&t, self.store.total_cost());
                true
            },
            Err(e) => {
                warn!("Rejected transaction ({amount}, '{category}'): {e}");
                false
            }
        }
    }

    pub(crate) fn set_filter(&mut self, filter: Filter) {
        info!("Filter set to {}", filter);
        self.filter = Some(filter);
    }

    /// Run the active filter over every transaction and report the matching rows to the display.
    pub(crate) fn apply_filter(&mut self) -> Result<Vec<usize>> {
        let filter = self.filter.as_ref().ok_or_else(|| Error::invalid_argument("No filter has been set"))?;
        let rows = filter.matching_rows(self.store.transactions());
        let matched_cost: f64 = filter.apply(self.store.transactions()).iter().map(|t| t.amount()).sum();
        info!("{} of {} transactions match {}, costing {:.2}", rows.len(), self.store.len(), filter, matched_cost);
        self.sink.on_filter_result(&rows);
        Ok(rows)
    }

    /// Undo the transaction shown at `row`. Rows past the last transaction, including the
    /// totals row, are rejected without changing anything.
    pub(crate) fn remove_transaction(&mut self, row: usize) -> Result<Transaction> {
        let removed = self.store.remove_at(row).ok_or_else(|| {
            warn!("Row {} does not hold a transaction ({} rows)", row, self.store.len());
            Error::invalid_argument("Invalid row selected")
        })?;

        info!("Removed transaction {:.2} {} at row {}", removed.amount(), removed.category(), row);
        self.sink.on_transaction_removed(row, self.store.total_cost());
        Ok(removed)
    }

    pub(crate) fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }

    pub(crate) fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub(crate) fn active_filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    fn is_allowed_category(&self, category: &str) -> bool {
        match &self.allowed_categories {
            Some(allowed) => allowed.iter().any(|c| c.eq_ignore_ascii_case(category)),
            None => true
        }
    }
}

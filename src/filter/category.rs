use crate::common::{Error, Result};
use crate::transaction::Transaction;
use crate::transaction::validation::is_valid_category;

/// Matches transactions with exactly this category (case sensitive).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub(crate) fn new(category: &str) -> Result<CategoryFilter> {
        if !is_valid_category(category) {
            return Err(Error::invalid_argument("Invalid category filter"));
        }
        Ok(CategoryFilter { category: category.to_string() })
    }

    pub(crate) fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn matches(&self, t: &Transaction) -> bool {
        t.category() == self.category
    }
}

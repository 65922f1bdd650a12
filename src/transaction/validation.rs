/// Upper bound (inclusive) for a single expense.
pub(crate) const MAX_AMOUNT: f64 = 1000.0;

/// Amount must be in (0, 1000].
pub(crate) fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0 && amount <= MAX_AMOUNT
}

/// A category is a non-blank word made of letters only, e.g. `food`.
pub(crate) fn is_valid_category(category: &str) -> bool {
    if category.trim().is_empty() {
        return false;
    }

    category.chars().all(char::is_alphabetic)
}

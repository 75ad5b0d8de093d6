//! Expense model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An expense submitted for approval.
///
/// The amount is not validated; zero and negative amounts fall within every
/// limit and are approved by the first employee asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// The cost of the expense.
    pub amount: Decimal,
    /// Free-text description of what the money is for.
    pub description: String,
}

impl Expense {
    /// Creates a new expense.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_approval::models::Expense;
    /// use rust_decimal::Decimal;
    ///
    /// let expense = Expense::new(Decimal::from(500), "magazins");
    /// assert_eq!(expense.description, "magazins");
    /// ```
    pub fn new(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

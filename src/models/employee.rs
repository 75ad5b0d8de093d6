//! Employee model and related types.
//!
//! Employees are owned by an [`OrgChart`](crate::approval::OrgChart); the
//! direct manager link is an [`EmployeeId`] into that chart rather than an
//! owning pointer.

use std::fmt;

use serde::Serialize;

use super::{Expense, Role};

/// Index of an employee within its org chart.
///
/// Ids are only handed out by [`OrgChart`](crate::approval::OrgChart); they
/// serialize for escalation traces but cannot be deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EmployeeId(pub(crate) usize);

impl EmployeeId {
    /// Returns the raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents an employee in the approval hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// The employee's display name.
    pub name: String,
    /// The role that caps what this employee may approve.
    pub role: Role,
    /// The next employee up the escalation chain, if wired.
    pub direct_manager: Option<EmployeeId>,
}

impl Employee {
    /// Creates an employee with no manager attached.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            direct_manager: None,
        }
    }

    /// Returns true if this employee may approve the expense without escalating.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_approval::models::{Employee, Expense, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let john = Employee::new("john smith", Role::Employee);
    /// assert!(john.can_approve(&Expense::new(Decimal::from(1_000), "magazins")));
    /// assert!(!john.can_approve(&Expense::new(Decimal::from(5_000), "hotel")));
    /// ```
    pub fn can_approve(&self, expense: &Expense) -> bool {
        self.role.can_approve(expense.amount)
    }
}

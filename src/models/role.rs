//! Role model and approval limits.
//!
//! Each employee holds exactly one [`Role`], which caps the expense amount
//! the employee may approve without escalating.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tier an employee occupies in the approval hierarchy.
///
/// Limits increase strictly from [`Role::Employee`] to [`Role::President`];
/// the president accepts any amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Individual contributor, may approve up to 1,000.
    Employee,
    /// Team manager, may approve up to 10,000.
    TeamManager,
    /// Department manager, may approve up to 100,000.
    DepartmentManager,
    /// President, may approve any amount.
    President,
}

impl Role {
    /// Every role, ordered by ascending approval limit.
    pub const ALL: [Role; 4] = [
        Role::Employee,
        Role::TeamManager,
        Role::DepartmentManager,
        Role::President,
    ];

    /// Returns the maximum expense amount this role may approve.
    ///
    /// The president's limit is [`Decimal::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_approval::models::Role;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Role::TeamManager.approval_limit(), Decimal::from(10_000));
    /// assert_eq!(Role::President.approval_limit(), Decimal::MAX);
    /// ```
    pub fn approval_limit(&self) -> Decimal {
        match self {
            Role::Employee => Decimal::from(1_000),
            Role::TeamManager => Decimal::from(10_000),
            Role::DepartmentManager => Decimal::from(100_000),
            Role::President => Decimal::MAX,
        }
    }

    /// Returns true if `amount` is within this role's limit (inclusive).
    pub fn can_approve(&self, amount: Decimal) -> bool {
        amount <= self.approval_limit()
    }

    /// Returns the human-readable name of the role.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::TeamManager => "Team Manager",
            Role::DepartmentManager => "Department Manager",
            Role::President => "President",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

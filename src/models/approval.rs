//! Approval result models.
//!
//! This module contains the [`Approval`] record emitted at the approving
//! employee and the [`ApprovalOutcome`] returned to the caller, including
//! the escalation trace of every employee the request visited.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, Role};

/// The record of a successful approval.
///
/// Its [`Display`](fmt::Display) form is the line written to the console:
/// approver name, expense description, then cost.
///
/// # Example
///
/// ```
/// use expense_approval::models::{Approval, Role};
/// use rust_decimal::Decimal;
///
/// let approval = Approval {
///     approver: "john smith".to_string(),
///     role: Role::Employee,
///     description: "magazins".to_string(),
///     amount: Decimal::from(500),
/// };
/// assert_eq!(approval.to_string(), "john smith approved expense 'magazins', cost=500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    /// Name of the employee who approved the expense.
    pub approver: String,
    /// Role of the approving employee.
    pub role: Role,
    /// Description of the approved expense.
    pub description: String,
    /// Amount of the approved expense.
    pub amount: Decimal,
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} approved expense '{}', cost={}",
            self.approver, self.description, self.amount
        )
    }
}

/// What an employee did with a request during an escalation walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationDecision {
    /// The amount was within the limit.
    Approved,
    /// The amount exceeded the limit and was forwarded to the manager.
    Escalated,
    /// The amount exceeded the limit and no manager was attached.
    Exhausted,
}

/// A single visited employee in an escalation walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EscalationStep {
    /// The visited employee.
    pub employee_id: EmployeeId,
    /// The visited employee's name.
    pub employee: String,
    /// The visited employee's role.
    pub role: Role,
    /// The role's approval limit.
    pub limit: Decimal,
    /// What the employee did with the request.
    pub decision: EscalationDecision,
}

/// The result of submitting an expense to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApprovalOutcome {
    /// Someone in the chain approved the expense.
    Approved {
        /// The emitted approval record.
        approval: Approval,
        /// Every employee visited, ending with the approver.
        escalation: Vec<EscalationStep>,
    },
    /// The chain ran out before anyone could approve the expense.
    Unapproved {
        /// Every employee visited, ending with the top of the chain.
        escalation: Vec<EscalationStep>,
    },
}

impl ApprovalOutcome {
    /// Returns true if the expense was approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalOutcome::Approved { .. })
    }

    /// Returns the approval record, if any.
    pub fn approval(&self) -> Option<&Approval> {
        match self {
            ApprovalOutcome::Approved { approval, .. } => Some(approval),
            ApprovalOutcome::Unapproved { .. } => None,
        }
    }

    /// Returns the name of the approving employee, if any.
    pub fn approver(&self) -> Option<&str> {
        self.approval().map(|approval| approval.approver.as_str())
    }

    /// Returns the escalation trace.
    pub fn escalation(&self) -> &[EscalationStep] {
        match self {
            ApprovalOutcome::Approved { escalation, .. }
            | ApprovalOutcome::Unapproved { escalation } => escalation,
        }
    }

    /// Returns the number of times the request was forwarded to a manager.
    pub fn hops(&self) -> usize {
        self.escalation().len().saturating_sub(1)
    }
}

//! Expense approval with escalation up the manager chain.
//!
//! An employee approves an expense when its amount is within the employee's
//! role limit (inclusive). Otherwise the identical expense is forwarded to the
//! direct manager, and on up the chain until someone approves it or the
//! chain ends. The walk is iterative, so chain depth is bounded only by the
//! chart size.
//! A request that reaches the top of the chain unapproved is dropped: no
//! notification is emitted and no error is raised, but the caller still gets
//! an [`ApprovalOutcome::Unapproved`] describing the walk.

use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Approval, ApprovalOutcome, EmployeeId, EscalationDecision, EscalationStep, Expense,
};

use super::{ApprovalSink, OrgChart};

impl OrgChart {
    /// Submits an expense to `employee`, escalating as needed.
    ///
    /// The sink receives one [`Approval`] from the approving employee, or
    /// nothing if the chain is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if `employee` is not in this chart, or
    /// `Output` if the sink fails to record the approval.
    ///
    /// # Example
    ///
    /// ```
    /// use expense_approval::approval::OrgChart;
    /// use expense_approval::models::{Approval, Expense, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let mut chart = OrgChart::new();
    /// let john = chart.add_employee("john smith", Role::Employee)?;
    /// let robert = chart.add_employee("robert booth", Role::TeamManager)?;
    /// chart.set_direct_manager(john, robert)?;
    ///
    /// let mut approvals: Vec<Approval> = Vec::new();
    /// let outcome = chart.approve(
    ///     john,
    ///     &Expense::new(Decimal::from(5_000), "hotel accomodation"),
    ///     &mut approvals,
    /// )?;
    ///
    /// assert_eq!(outcome.approver(), Some("robert booth"));
    /// assert_eq!(approvals.len(), 1);
    /// # Ok::<(), expense_approval::error::EngineError>(())
    /// ```
    pub fn approve<S: ApprovalSink + ?Sized>(
        &self,
        employee: EmployeeId,
        expense: &Expense,
        sink: &mut S,
    ) -> EngineResult<ApprovalOutcome> {
        let mut escalation: Vec<EscalationStep> = Vec::new();
        let mut current = employee;

        loop {
            if escalation.len() >= self.employees.len() {
                return Err(EngineError::EscalationDepthExceeded {
                    employee: self.employee(employee)?.name.clone(),
                    max_depth: self.employees.len(),
                });
            }

            let visited = self.employee(current)?;
            let limit = visited.role.approval_limit();
            let mut step = EscalationStep {
                employee_id: current,
                employee: visited.name.clone(),
                role: visited.role,
                limit,
                decision: EscalationDecision::Approved,
            };

            if visited.can_approve(expense) {
                escalation.push(step);
                let approval = Approval {
                    approver: visited.name.clone(),
                    role: visited.role,
                    description: expense.description.clone(),
                    amount: expense.amount,
                };
                info!(
                    approver = %approval.approver,
                    role = %approval.role,
                    amount = %approval.amount,
                    hops = escalation.len() - 1,
                    "Expense approved"
                );
                sink.record(&approval)?;
                return Ok(ApprovalOutcome::Approved {
                    approval,
                    escalation,
                });
            }

            match visited.direct_manager {
                Some(manager) => {
                    debug!(
                        employee = %visited.name,
                        limit = %limit,
                        amount = %expense.amount,
                        "Limit exceeded, escalating to direct manager"
                    );
                    step.decision = EscalationDecision::Escalated;
                    escalation.push(step);
                    current = manager;
                }
                None => {
                    warn!(
                        employee = %visited.name,
                        limit = %limit,
                        amount = %expense.amount,
                        description = %expense.description,
                        "Escalation chain exhausted, expense not approved"
                    );
                    step.decision = EscalationDecision::Exhausted;
                    escalation.push(step);
                    return Ok(ApprovalOutcome::Unapproved { escalation });
                }
            }
        }
    }
}

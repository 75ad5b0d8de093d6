//! The fixed demonstration scenario.
//!
//! A four-level chain (employee, team manager, department manager,
//! president) and four expenses that are each approved one level higher.

use rust_decimal::Decimal;

use crate::approval::OrgChart;
use crate::error::EngineResult;
use crate::models::{EmployeeId, Expense, Role};

/// Builds the demonstration chain and returns it with the id of its leaf
/// employee, john smith.
pub fn build_demo_chart() -> EngineResult<(OrgChart, EmployeeId)> {
    let mut chart = OrgChart::new();

    let john = chart.add_employee("john smith", Role::Employee)?;
    let robert = chart.add_employee("robert booth", Role::TeamManager)?;
    let david = chart.add_employee("david jones", Role::DepartmentManager)?;
    let cecil = chart.add_employee("cecil williamson", Role::President)?;

    chart.set_direct_manager(john, robert)?;
    chart.set_direct_manager(robert, david)?;
    chart.set_direct_manager(david, cecil)?;

    Ok((chart, john))
}

/// The expenses john smith submits in the demonstration, in order.
pub fn demo_expenses() -> Vec<Expense> {
    vec![
        Expense::new(Decimal::from(500), "magazins"),
        Expense::new(Decimal::from(5_000), "hotel accomodation"),
        Expense::new(Decimal::from(50_000), "conference costs"),
        Expense::new(Decimal::from(200_000), "new lorry"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Approval;

    #[test]
    fn test_each_expense_is_approved_one_level_higher() {
        let (chart, john) = build_demo_chart().unwrap();
        let mut approvals: Vec<Approval> = Vec::new();

        for expense in demo_expenses() {
            chart.approve(john, &expense, &mut approvals).unwrap();
        }

        let approvers: Vec<&str> = approvals.iter().map(|a| a.approver.as_str()).collect();
        assert_eq!(
            approvers,
            vec!["john smith", "robert booth", "david jones", "cecil williamson"]
        );
    }
}

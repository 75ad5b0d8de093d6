//! Org chart assembly.
//!
//! The [`OrgChart`] owns every [`Employee`]. Building a chart is two-phase:
//! employees are added first, then wired to their direct managers, so a
//! report can be created before its manager exists.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeId, Role};

/// Registry of employees and their manager links.
///
/// # Example
///
/// ```
/// use expense_approval::approval::OrgChart;
/// use expense_approval::models::Role;
///
/// let mut chart = OrgChart::new();
/// let john = chart.add_employee("john smith", Role::Employee)?;
/// let robert = chart.add_employee("robert booth", Role::TeamManager)?;
/// chart.set_direct_manager(john, robert)?;
///
/// assert_eq!(chart.chain_of(john)?, vec!["john smith", "robert booth"]);
/// # Ok::<(), expense_approval::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrgChart {
    pub(super) employees: Vec<Employee>,
}

impl OrgChart {
    /// Creates an empty org chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee with no manager and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if the name is empty or only whitespace.
    pub fn add_employee(
        &mut self,
        name: impl Into<String>,
        role: Role,
    ) -> EngineResult<EmployeeId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let id = EmployeeId(self.employees.len());
        debug!(employee = %name, role = %role, id = %id, "Adding employee");
        self.employees.push(Employee::new(name, role));
        Ok(id)
    }

    /// Attaches `manager` as the direct manager of `report`.
    ///
    /// Calling it again replaces the previous manager.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for an unknown id, or `ManagerCycle` if
    /// `report` already sits above `manager` (or is `manager`). On error the
    /// existing link is left untouched.
    pub fn set_direct_manager(
        &mut self,
        report: EmployeeId,
        manager: EmployeeId,
    ) -> EngineResult<()> {
        self.employee(report)?;
        self.employee(manager)?;

        if self.is_in_chain(manager, report) {
            let error = EngineError::ManagerCycle {
                employee: self.employees[report.0].name.clone(),
                manager: self.employees[manager.0].name.clone(),
            };
            warn!(error = %error, "Rejected manager assignment");
            return Err(error);
        }

        debug!(
            employee = %self.employees[report.0].name,
            manager = %self.employees[manager.0].name,
            "Wiring direct manager"
        );
        self.employees[report.0].direct_manager = Some(manager);
        Ok(())
    }

    /// Returns the employee with the given id.
    pub fn employee(&self, id: EmployeeId) -> EngineResult<&Employee> {
        self.employees
            .get(id.0)
            .ok_or(EngineError::EmployeeNotFound { id: id.0 })
    }

    /// Returns the id of the first employee with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<EmployeeId> {
        self.employees
            .iter()
            .position(|employee| employee.name == name)
            .map(EmployeeId)
    }

    /// Returns the names along the escalation chain starting at `id`.
    pub fn chain_of(&self, id: EmployeeId) -> EngineResult<Vec<&str>> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(next) = current {
            let employee = self.employee(next)?;
            chain.push(employee.name.as_str());
            current = employee.direct_manager;
        }
        Ok(chain)
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the chart has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over all employees with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> {
        self.employees
            .iter()
            .enumerate()
            .map(|(index, employee)| (EmployeeId(index), employee))
    }

    /// Returns true if `target` is reached walking up from `start` (inclusive).
    ///
    /// Bounded by the chart size.
    fn is_in_chain(&self, start: EmployeeId, target: EmployeeId) -> bool {
        let mut current = Some(start);
        for _ in 0..=self.employees.len() {
            match current {
                Some(id) if id == target => return true,
                Some(id) => current = self.employees[id.0].direct_manager,
                None => return false,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_level_chart() -> (OrgChart, [EmployeeId; 4]) {
        let mut chart = OrgChart::new();
        let john = chart.add_employee("john smith", Role::Employee).unwrap();
        let robert = chart.add_employee("robert booth", Role::TeamManager).unwrap();
        let david = chart.add_employee("david jones", Role::DepartmentManager).unwrap();
        let cecil = chart.add_employee("cecil williamson", Role::President).unwrap();
        chart.set_direct_manager(john, robert).unwrap();
        chart.set_direct_manager(robert, david).unwrap();
        chart.set_direct_manager(david, cecil).unwrap();
        (chart, [john, robert, david, cecil])
    }

    #[test]
    fn test_add_employee_assigns_sequential_ids() {
        let mut chart = OrgChart::new();
        let first = chart.add_employee("a", Role::Employee).unwrap();
        let second = chart.add_employee("b", Role::Employee).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(chart.len(), 2);
    }

    #[test]
    fn test_add_employee_rejects_blank_name() {
        let mut chart = OrgChart::new();
        let result = chart.add_employee("   ", Role::Employee);

        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_chain_follows_managers_to_the_top() {
        let (chart, [john, _, david, _]) = four_level_chart();

        assert_eq!(
            chart.chain_of(john).unwrap(),
            vec!["john smith", "robert booth", "david jones", "cecil williamson"]
        );
        assert_eq!(
            chart.chain_of(david).unwrap(),
            vec!["david jones", "cecil williamson"]
        );
    }

    #[test]
    fn test_set_direct_manager_replaces_previous_link() {
        let (mut chart, [john, robert, david, _]) = four_level_chart();
        assert_eq!(chart.employee(john).unwrap().direct_manager, Some(robert));

        chart.set_direct_manager(john, david).unwrap();
        assert_eq!(chart.employee(john).unwrap().direct_manager, Some(david));
    }

    #[test]
    fn test_set_direct_manager_twice_is_idempotent() {
        let (mut chart, [john, robert, _, _]) = four_level_chart();
        chart.set_direct_manager(john, robert).unwrap();
        assert_eq!(chart.employee(john).unwrap().direct_manager, Some(robert));
    }

    #[test]
    fn test_self_management_is_rejected() {
        let (mut chart, [john, robert, _, _]) = four_level_chart();
        let result = chart.set_direct_manager(john, john);

        assert!(matches!(result, Err(EngineError::ManagerCycle { .. })));
        assert_eq!(chart.employee(john).unwrap().direct_manager, Some(robert));
    }

    #[test]
    fn test_closing_a_loop_is_rejected() {
        let (mut chart, [john, _, _, cecil]) = four_level_chart();
        let result = chart.set_direct_manager(cecil, john);

        match result {
            Err(EngineError::ManagerCycle { employee, manager }) => {
                assert_eq!(employee, "cecil williamson");
                assert_eq!(manager, "john smith");
            }
            other => panic!("expected ManagerCycle, got {:?}", other),
        }
        assert!(chart.employee(cecil).unwrap().direct_manager.is_none());
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let (mut chart, [john, _, _, _]) = four_level_chart();
        let stranger = EmployeeId(42);

        assert!(matches!(
            chart.set_direct_manager(john, stranger),
            Err(EngineError::EmployeeNotFound { id: 42 })
        ));
        assert!(matches!(
            chart.employee(stranger),
            Err(EngineError::EmployeeNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_find_by_name() {
        let (chart, [_, robert, _, _]) = four_level_chart();
        assert_eq!(chart.find_by_name("robert booth"), Some(robert));
        assert_eq!(chart.find_by_name("nobody"), None);
    }

    #[test]
    fn test_iter_yields_ids_in_insertion_order() {
        let (chart, ids) = four_level_chart();
        let seen: Vec<EmployeeId> = chart.iter().map(|(id, _)| id).collect();
        assert_eq!(seen, ids.to_vec());
    }
}

//! Configuration types for org charts.
//!
//! These structures are deserialized from YAML org chart files.

use serde::Deserialize;

use crate::models::Role;

/// One employee entry in an org chart file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeConfig {
    /// The employee's name, unique within the file.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Name of the direct manager, if any.
    #[serde(default)]
    pub manager: Option<String>,
}

/// Org chart file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrgChartConfig {
    /// All employees, in any order.
    pub employees: Vec<EmployeeConfig>,
}

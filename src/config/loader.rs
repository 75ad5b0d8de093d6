//! Org chart loading functionality.
//!
//! This module provides the [`OrgChartLoader`] type for building an
//! [`OrgChart`] from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::approval::OrgChart;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeId;

use super::types::OrgChartConfig;

/// Loads org charts from YAML.
///
/// # File Format
///
/// ```text
/// employees:
///   - name: john smith
///     role: employee
///     manager: robert booth
///   - name: robert booth
///     role: team_manager
/// ```
///
/// Employees may appear in any order; every employee is added before any
/// manager is wired.
///
/// # Example
///
/// ```no_run
/// use expense_approval::config::OrgChartLoader;
///
/// let chart = OrgChartLoader::load("./config/demo/org_chart.yaml")?;
/// println!("Loaded {} employees", chart.len());
/// # Ok::<(), expense_approval::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgChartLoader;

impl OrgChartLoader {
    /// Loads an org chart from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, `ConfigParseError`
    /// if it is not valid YAML, and the wiring errors of [`Self::build`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<OrgChart> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let chart = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, employees = chart.len(), "Loaded org chart");
        Ok(chart)
    }

    /// Parses YAML content; `source` names the content in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<OrgChart> {
        let config: OrgChartConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::build(&config)
    }

    /// Builds an org chart from parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployee` for a repeated name, `UnknownManager` for a
    /// manager name that is not declared, `InvalidEmployee` for a blank name,
    /// and `ManagerCycle` if the links form a loop.
    pub fn build(config: &OrgChartConfig) -> EngineResult<OrgChart> {
        let mut chart = OrgChart::new();
        let mut ids: HashMap<&str, EmployeeId> = HashMap::new();

        for entry in &config.employees {
            if ids.contains_key(entry.name.as_str()) {
                return Err(EngineError::DuplicateEmployee {
                    name: entry.name.clone(),
                });
            }
            let id = chart.add_employee(entry.name.as_str(), entry.role)?;
            ids.insert(entry.name.as_str(), id);
        }

        for entry in &config.employees {
            let Some(manager_name) = entry.manager.as_deref() else {
                continue;
            };
            let manager = ids
                .get(manager_name)
                .copied()
                .ok_or_else(|| EngineError::UnknownManager {
                    employee: entry.name.clone(),
                    manager: manager_name.to_string(),
                })?;
            chart.set_direct_manager(ids[entry.name.as_str()], manager)?;
        }

        Ok(chart)
    }
}

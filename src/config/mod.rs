//! Org chart configuration for the expense approval engine.
//!
//! This module loads org charts from YAML files: each employee's name, role,
//! and the name of their direct manager.
//!
//! # Example
//!
//! ```no_run
//! use expense_approval::config::OrgChartLoader;
//!
//! let chart = OrgChartLoader::load("./config/demo/org_chart.yaml").unwrap();
//! println!("Loaded {} employees", chart.len());
//! ```

mod loader;
mod types;

pub use loader::OrgChartLoader;
pub use types::{EmployeeConfig, OrgChartConfig};

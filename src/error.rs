//! Error types for the expense approval engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while assembling an org chart
//! or walking it during approval.
//!
//! An expense that nobody in the chain can approve is *not* an error: it is
//! reported through [`ApprovalOutcome::Unapproved`](crate::models::ApprovalOutcome).

use thiserror::Error;

/// The main error type for the expense approval engine.
///
/// # Example
///
/// ```
/// use expense_approval::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/org_chart.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/org_chart.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee id does not belong to the org chart.
    #[error("Employee not found: #{id}")]
    EmployeeNotFound {
        /// The raw index that was looked up.
        id: usize,
    },

    /// An employee record was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Two employees in a configuration share the same name.
    #[error("Duplicate employee: {name}")]
    DuplicateEmployee {
        /// The repeated name.
        name: String,
    },

    /// A configured manager name does not match any declared employee.
    #[error("Manager '{manager}' of '{employee}' is not declared")]
    UnknownManager {
        /// The employee whose manager is missing.
        employee: String,
        /// The undeclared manager name.
        manager: String,
    },

    /// Wiring the manager would close a loop in the chain.
    #[error("Assigning '{manager}' as manager of '{employee}' would create a cycle")]
    ManagerCycle {
        /// The employee being wired.
        employee: String,
        /// The proposed manager.
        manager: String,
    },

    /// An approval could not be written to its sink.
    #[error("Failed to write approval: {message}")]
    Output {
        /// A description of the write failure.
        message: String,
    },

    /// An escalation walk visited more nodes than the chart holds.
    #[error("Escalation from '{employee}' exceeded {max_depth} hops")]
    EscalationDepthExceeded {
        /// The employee the walk started from.
        employee: String,
        /// The hop bound that was hit.
        max_depth: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Hierarchical expense approval.
//!
//! Each employee holds a role that caps the expense amount they may approve.
//! Expenses above that cap escalate to the employee's direct manager, and on
//! up the chain until someone approves them or the chain ends.

#![warn(missing_docs)]

pub mod approval;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;

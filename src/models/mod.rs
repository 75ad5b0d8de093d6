//! Core data models for the expense approval engine.
//!
//! This module contains all the domain models used throughout the engine.

mod approval;
mod employee;
mod expense;
mod role;

pub use approval::{Approval, ApprovalOutcome, EscalationDecision, EscalationStep};
pub use employee::{Employee, EmployeeId};
pub use expense::Expense;
pub use role::Role;

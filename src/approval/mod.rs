//! Approval logic for the expense approval engine.
//!
//! This module contains the org chart that owns employees and their manager
//! links, the escalating approval walk, and the sinks that receive approval
//! notifications.

mod escalation;
mod org_chart;
mod sink;

pub use org_chart::OrgChart;
pub use sink::{ApprovalSink, ConsoleSink, LineSink};

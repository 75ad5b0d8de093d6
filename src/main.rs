//! Runs the demonstration expense approval scenario.
//!
//! Approval lines go to stdout; logs go to stderr (`RUST_LOG`, default `warn`).

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use expense_approval::approval::ConsoleSink;
use expense_approval::demo::{build_demo_chart, demo_expenses};
use expense_approval::error::EngineResult;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Demonstration failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> EngineResult<()> {
    let (chart, john) = build_demo_chart()?;
    let mut console = ConsoleSink;

    for expense in demo_expenses() {
        chart.approve(john, &expense, &mut console)?;
    }

    Ok(())
}

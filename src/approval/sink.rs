//! Approval notification sinks.
//!
//! A sink receives exactly one [`Approval`] for each approved expense, at the
//! employee who approved it. Escalation hops and unapproved expenses produce
//! nothing.

use std::io::{self, Write};

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::Approval;

/// Receives approval notifications.
pub trait ApprovalSink {
    /// Records one approval.
    ///
    /// # Errors
    ///
    /// Returns `Output` if the approval could not be delivered.
    fn record(&mut self, approval: &Approval) -> EngineResult<()>;
}

/// Prints each approval as a line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ApprovalSink for ConsoleSink {
    fn record(&mut self, approval: &Approval) -> EngineResult<()> {
        write_line(&mut io::stdout().lock(), approval)
    }
}

fn write_line<W: Write + ?Sized>(writer: &mut W, approval: &Approval) -> EngineResult<()> {
    writeln!(writer, "{approval}").map_err(|err| {
        warn!(error = %err, approver = %approval.approver, "Failed to write approval");
        EngineError::Output {
            message: err.to_string(),
        }
    })
}

/// Writes each approval as a line to any [`Write`] implementation.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ApprovalSink for LineSink<W> {
    fn record(&mut self, approval: &Approval) -> EngineResult<()> {
        write_line(&mut self.writer, approval)
    }
}

/// Collects approvals in memory.
impl ApprovalSink for Vec<Approval> {
    fn record(&mut self, approval: &Approval) -> EngineResult<()> {
        self.push(approval.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use rust_decimal::Decimal;

    fn approval(approver: &str, description: &str, amount: i64) -> Approval {
        Approval {
            approver: approver.to_string(),
            role: Role::Employee,
            description: description.to_string(),
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn test_line_sink_writes_one_line_per_approval() {
        let mut sink = LineSink::new(Vec::new());
        sink.record(&approval("john smith", "magazins", 500)).unwrap();
        sink.record(&approval("john smith", "pens", 12)).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "john smith approved expense 'magazins', cost=500\n\
             john smith approved expense 'pens', cost=12\n"
        );
    }

    #[test]
    fn test_vec_sink_collects_approvals() {
        let mut sink: Vec<Approval> = Vec::new();
        sink.record(&approval("john smith", "magazins", 500)).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].description, "magazins");
    }

    #[test]
    fn test_line_sink_reports_write_failure() {
        struct ClosedWriter;

        impl Write for ClosedWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = LineSink::new(ClosedWriter);
        let result = sink.record(&approval("john smith", "magazins", 500));

        match result {
            Err(EngineError::Output { message }) => assert!(message.contains("output closed")),
            other => panic!("expected Output error, got {:?}", other),
        }
    }
}

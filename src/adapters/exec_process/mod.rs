//! Process execution adapter
//!
//! Runs external tools synchronously through `std::process`, capturing both
//! output streams so failures can be reported verbatim.

use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

use crate::ports::{ExecutePort, ToolInvocation, ToolOutput};

/// Blocking process runner
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create new process runner
    pub fn new() -> Self {
        Self
    }
}

impl ExecutePort for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> std::io::Result<ToolOutput> {
        debug!(command = %invocation, "Running external tool");
        let started = Instant::now();

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()?;

        debug!(
            code = ?output.status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "External tool finished"
        );

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

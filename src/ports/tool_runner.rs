use std::time::Duration;

use crate::domain::InvocationError;

/// Captured result of a process that exited on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Port for running an external command-line tool.
pub trait ToolRunner {
    /// Run `program` with `args`, killing it once `timeout` elapses.
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<ToolOutput, InvocationError>;
}

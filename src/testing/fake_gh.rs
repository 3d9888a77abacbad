use std::sync::Mutex;
use std::time::Duration;

use crate::domain::InvocationError;
use crate::ports::{ToolOutput, ToolRunner};

type Responder = Box<dyn Fn(&str, &[String]) -> Result<ToolOutput, InvocationError> + Send + Sync>;

/// Scripted stand-in for the GitHub CLI that records every invocation.
pub struct FakeGh {
    respond: Responder,
    pub calls: Mutex<Vec<FakeCall>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCall {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl FakeGh {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str, &[String]) -> Result<ToolOutput, InvocationError> + Send + Sync + 'static,
    {
        Self { respond: Box::new(respond), calls: Mutex::new(Vec::new()) }
    }

    /// Every call exits 0; `issue create` prints a URL.
    pub fn succeeding() -> Self {
        Self::new(|_, args| {
            if args.first().map(String::as_str) == Some("issue") {
                Ok(ok("https://github.com/owner/repo/issues/1\n"))
            } else {
                Ok(ok(""))
            }
        })
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls whose first argument is `subcommand` (e.g. `label`, `issue`).
    pub fn calls_for(&self, subcommand: &str) -> Vec<FakeCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.args.first().map(String::as_str) == Some(subcommand))
            .collect()
    }

    /// Number of `label create` and `issue create` calls.
    pub fn mutating_calls(&self) -> usize {
        self.calls_for("label").len() + self.calls_for("issue").len()
    }
}

impl ToolRunner for FakeGh {
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<ToolOutput, InvocationError> {
        self.calls.lock().unwrap().push(FakeCall {
            program: program.to_string(),
            args: args.to_vec(),
            timeout,
        });
        (self.respond)(program, args)
    }
}

pub fn ok(stdout: &str) -> ToolOutput {
    ToolOutput { success: true, stdout: stdout.to_string(), stderr: String::new() }
}

pub fn failed(stderr: &str) -> ToolOutput {
    ToolOutput { success: false, stdout: String::new(), stderr: stderr.to_string() }
}

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;
use wait_timeout::ChildExt;

use crate::domain::InvocationError;
use crate::ports::{ToolOutput, ToolRunner};

/// Runs tools as child processes with piped output and a hard timeout.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<ToolOutput, InvocationError> {
        let started = Instant::now();
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(InvocationError::Spawn)?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match child.wait_timeout(timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                kill(&mut child);
                debug!(program, subcommand = %subcommand(args), ?timeout, "tool timed out");
                // Readers are left detached: a grandchild may still hold the pipes open.
                return Err(InvocationError::Timeout { after: timeout });
            }
            Err(e) => {
                kill(&mut child);
                return Err(InvocationError::Wait(e));
            }
        };

        // The child has exited, but a grandchild may still hold the pipes open.
        let deadline = started + timeout;
        let (Some(stdout), Some(stderr)) = (collect(stdout, deadline), collect(stderr, deadline)) else {
            debug!(program, subcommand = %subcommand(args), ?timeout, "tool output not closed in time");
            return Err(InvocationError::Timeout { after: timeout });
        };

        let output = ToolOutput { success: status.success(), stdout, stderr };
        debug!(
            program,
            subcommand = %subcommand(args),
            code = ?status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tool exited"
        );
        Ok(output)
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Receiver<Vec<u8>>> {
    pipe.map(|mut pipe| {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            let _ = tx.send(buf);
        });
        rx
    })
}

/// Wait for a reader until `deadline`; `None` means the pipe is still open.
fn collect(reader: Option<Receiver<Vec<u8>>>, deadline: Instant) -> Option<String> {
    let Some(reader) = reader else {
        return Some(String::new());
    };
    match reader.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(buf) => Some(String::from_utf8_lossy(&buf).into_owned()),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn subcommand(args: &[String]) -> String {
    args.iter().take(2).cloned().collect::<Vec<_>>().join(" ")
}

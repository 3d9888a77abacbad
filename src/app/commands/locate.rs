use std::time::Duration;

use tracing::debug;

use crate::domain::gh_args;
use crate::ports::ToolRunner;

/// Return the first candidate whose `--version` probe exits 0.
///
/// Spawn failures and timeouts count as a failed probe.
pub fn locate_gh<S: AsRef<str>>(
    runner: &dyn ToolRunner,
    candidates: &[S],
    timeout: Duration,
) -> Option<String> {
    let args = gh_args::version();
    candidates.iter().map(|c| c.as_ref()).find_map(|candidate| {
        match runner.run(candidate, &args, timeout) {
            Ok(output) if output.success => Some(candidate.to_string()),
            Ok(_) => {
                debug!(candidate, "version probe exited non-zero");
                None
            }
            Err(e) => {
                debug!(candidate, error = %e, "version probe failed");
                None
            }
        }
    })
}

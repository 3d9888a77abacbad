use std::io::Write;

use crate::app::context::GhSession;
use crate::domain::{AppError, FailureReason, IssueOutcome, IssueSpec, gh_args};

/// Open each issue in declaration order. Failures are reported and skipped.
pub fn create_issues(
    session: &GhSession<'_>,
    issues: &[IssueSpec],
    out: &mut dyn Write,
) -> Result<Vec<IssueOutcome>, AppError> {
    writeln!(out, "\nCreating GitHub issues for RealWorld implementation tasks...")?;

    let total = issues.len();
    let mut outcomes = Vec::with_capacity(total);
    for (index, issue) in issues.iter().enumerate() {
        writeln!(out, "\n{}/{}: Creating issue '{}'", index + 1, total, issue.title)?;

        let result = session.runner.run(
            session.gh,
            &gh_args::issue_create(issue, session.repo),
            session.timeouts.issue_create,
        );
        let outcome = IssueOutcome::classify(&result);
        match &outcome {
            IssueOutcome::Created(url) => {
                writeln!(out, "[SUCCESS] Issue created successfully: {}", url)?
            }
            IssueOutcome::Failed(FailureReason::Rejected(stderr)) => {
                writeln!(out, "[ERROR] Failed to create issue: {}", stderr)?
            }
            IssueOutcome::Failed(FailureReason::TimedOut) => {
                writeln!(out, "[ERROR] Timeout creating issue: {}", issue.title)?
            }
            IssueOutcome::Failed(FailureReason::Execution(e)) => {
                writeln!(out, "[ERROR] Error creating issue: {}", e)?
            }
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

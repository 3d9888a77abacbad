use super::error::InvocationError;
use crate::ports::ToolOutput;

/// Result of one `label create` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    Created,
    AlreadyExists,
    Failed(FailureReason),
}

/// Result of one `issue create` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    /// Carries whatever the tool printed, normally the issue URL.
    Created(String),
    Failed(FailureReason),
}

/// Why an item could not be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Non-zero exit; holds the trimmed diagnostic text.
    Rejected(String),
    TimedOut,
    /// The tool could not be run at all.
    Execution(String),
}

impl From<&InvocationError> for FailureReason {
    fn from(err: &InvocationError) -> Self {
        if err.is_timeout() {
            FailureReason::TimedOut
        } else {
            FailureReason::Execution(err.to_string())
        }
    }
}

impl LabelOutcome {
    pub fn classify(result: &Result<ToolOutput, InvocationError>) -> Self {
        match result {
            Ok(output) if output.success => LabelOutcome::Created,
            Ok(output) if output.stderr.to_lowercase().contains("already exists") => {
                LabelOutcome::AlreadyExists
            }
            Ok(output) => LabelOutcome::Failed(FailureReason::Rejected(output.stderr.trim().to_string())),
            Err(err) => LabelOutcome::Failed(err.into()),
        }
    }
}

impl IssueOutcome {
    pub fn classify(result: &Result<ToolOutput, InvocationError>) -> Self {
        match result {
            Ok(output) if output.success => IssueOutcome::Created(output.stdout.trim().to_string()),
            Ok(output) => IssueOutcome::Failed(FailureReason::Rejected(output.stderr.trim().to_string())),
            Err(err) => IssueOutcome::Failed(err.into()),
        }
    }
}

/// Tally of a full seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub labels_created: usize,
    pub labels_existing: usize,
    pub labels_failed: usize,
    pub issues_created: usize,
    pub issues_failed: usize,
}

impl SeedSummary {
    pub fn from_outcomes(labels: &[LabelOutcome], issues: &[IssueOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in labels {
            match outcome {
                LabelOutcome::Created => summary.labels_created += 1,
                LabelOutcome::AlreadyExists => summary.labels_existing += 1,
                LabelOutcome::Failed(_) => summary.labels_failed += 1,
            }
        }
        for outcome in issues {
            match outcome {
                IssueOutcome::Created(_) => summary.issues_created += 1,
                IssueOutcome::Failed(_) => summary.issues_failed += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Summary: labels {} created/updated, {} already existed, {} failed; issues {} created, {} failed",
            self.labels_created,
            self.labels_existing,
            self.labels_failed,
            self.issues_created,
            self.issues_failed
        )
    }
}

use std::io::Write;

use crate::app::context::GhSession;
use crate::domain::{AppError, FailureReason, LabelOutcome, LabelSpec, gh_args};

/// Create or update each label in order. Failures are reported and skipped.
pub fn create_labels(
    session: &GhSession<'_>,
    labels: &[LabelSpec],
    out: &mut dyn Write,
) -> Result<Vec<LabelOutcome>, AppError> {
    writeln!(out, "\nCreating GitHub labels...")?;

    let mut outcomes = Vec::with_capacity(labels.len());
    for label in labels {
        writeln!(out, "Creating label '{}'...", label.name)?;

        let result = session.runner.run(
            session.gh,
            &gh_args::label_create(label, session.repo),
            session.timeouts.label_create,
        );
        let outcome = LabelOutcome::classify(&result);
        report(out, label, &outcome)?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn report(out: &mut dyn Write, label: &LabelSpec, outcome: &LabelOutcome) -> std::io::Result<()> {
    let name = &label.name;
    match outcome {
        LabelOutcome::Created => writeln!(out, "[SUCCESS] Label '{}' created/updated", name),
        LabelOutcome::AlreadyExists => writeln!(out, "[INFO] Label '{}' already exists", name),
        LabelOutcome::Failed(FailureReason::Rejected(stderr)) => {
            writeln!(out, "[WARNING] Failed to create label '{}': {}", name, stderr)
        }
        LabelOutcome::Failed(FailureReason::TimedOut) => {
            writeln!(out, "[ERROR] Timeout creating label: {}", name)
        }
        LabelOutcome::Failed(FailureReason::Execution(e)) => {
            writeln!(out, "[ERROR] Error creating label '{}': {}", name, e)
        }
    }
}

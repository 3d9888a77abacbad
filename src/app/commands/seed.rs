use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use super::auth::check_auth;
use super::issues::create_issues;
use super::labels::create_labels;
use super::locate::locate_gh;
use super::manual::write_manual;
use crate::app::context::GhSession;
use crate::domain::{AppError, Catalog, DEFAULT_GH_CANDIDATES, SeedSummary, Timeouts};
use crate::ports::{Confirmer, ToolRunner};

const CONFIRM_PROMPT: &str = "Proceed with creating issues?";

/// Options for a seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedOptions {
    /// TOML catalog to use instead of the built-in plan.
    pub catalog: Option<PathBuf>,
    /// Explicit GitHub CLI path; replaces the default probe list.
    pub gh: Option<String>,
    /// `OWNER/REPO` forwarded to every create call.
    pub repo: Option<String>,
    /// Print the manual instructions without touching the tool.
    pub manual: bool,
    pub timeouts: Timeouts,
}

/// Result of a seeding run that reached a defined end state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedResult {
    /// Only the manual instructions were printed (`--manual`).
    ManualOnly,
    ToolNotFound,
    AuthFailed,
    Cancelled,
    Completed(SeedSummary),
}

impl SeedResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            SeedResult::ToolNotFound | SeedResult::AuthFailed => 1,
            SeedResult::ManualOnly | SeedResult::Cancelled | SeedResult::Completed(_) => 0,
        }
    }
}

/// Locate gh, check auth, confirm, then create labels and issues.
pub fn execute(
    options: &SeedOptions,
    runner: &dyn ToolRunner,
    confirmer: &mut dyn Confirmer,
    out: &mut dyn Write,
) -> Result<SeedResult, AppError> {
    let catalog = match &options.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    catalog.validate()?;
    debug!(labels = catalog.labels.len(), issues = catalog.issues.len(), "catalog loaded");

    write_banner(out)?;

    if options.manual {
        write_manual(&catalog, out)?;
        return Ok(SeedResult::ManualOnly);
    }

    let located = match &options.gh {
        Some(path) => locate_gh(runner, std::slice::from_ref(path), options.timeouts.version_probe),
        None => locate_gh(runner, DEFAULT_GH_CANDIDATES, options.timeouts.version_probe),
    };
    let Some(gh) = located else {
        writeln!(out, "[ERROR] GitHub CLI not found.")?;
        writeln!(out, "Install from: https://cli.github.com/")?;
        writeln!(out, "Or create issues manually using the output below.")?;
        write_manual(&catalog, out)?;
        return Ok(SeedResult::ToolNotFound);
    };
    info!(gh = %gh, "located GitHub CLI");

    let session = GhSession::new(runner, &gh)
        .with_repo(options.repo.as_deref())
        .with_timeouts(options.timeouts);

    if !check_auth(&session, out)?.is_authenticated() {
        return Ok(SeedResult::AuthFailed);
    }

    out.flush()?;
    if !confirmer.confirm(CONFIRM_PROMPT)? {
        writeln!(out, "Cancelled.")?;
        return Ok(SeedResult::Cancelled);
    }

    writeln!(out, "Found GitHub CLI at: {}", gh)?;
    let label_outcomes = create_labels(&session, &catalog.labels, out)?;
    let issue_outcomes = create_issues(&session, &catalog.issues, out)?;

    let summary = SeedSummary::from_outcomes(&label_outcomes, &issue_outcomes);
    writeln!(out, "\n{}", summary)?;
    writeln!(out, "\nDone! Check your repository for the created issues.")?;
    Ok(SeedResult::Completed(summary))
}

fn write_banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "GitHub Issues Creation Script")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "This script will create GitHub issues based on the RealWorld implementation tasks.")?;
    writeln!(out, "Make sure you're authenticated with GitHub CLI first: gh auth login")?;
    writeln!(out)
}

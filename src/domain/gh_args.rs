//! Argument vectors for GitHub CLI invocations.
//!
//! Every value is passed as its own argument; nothing is ever joined into a
//! shell string.

use std::time::Duration;

use super::issue::IssueSpec;
use super::label::LabelSpec;

/// Where to look for the GitHub CLI, in probe order.
pub const DEFAULT_GH_CANDIDATES: &[&str] = &[
    "gh",
    "/c/Program Files/GitHub CLI/gh.exe",
    "C:\\Program Files\\GitHub CLI\\gh.exe",
    "/usr/local/bin/gh",
    "/opt/homebrew/bin/gh",
];

/// Per-call time budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub version_probe: Duration,
    pub auth_status: Duration,
    pub label_create: Duration,
    pub issue_create: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            version_probe: Duration::from_secs(5),
            auth_status: Duration::from_secs(10),
            label_create: Duration::from_secs(15),
            issue_create: Duration::from_secs(30),
        }
    }
}

pub fn version() -> Vec<String> {
    vec!["--version".to_string()]
}

pub fn auth_status() -> Vec<String> {
    vec!["auth".to_string(), "status".to_string()]
}

/// `label create` with `--force` so an existing label is updated in place.
pub fn label_create(label: &LabelSpec, repo: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "label".into(),
        "create".into(),
        label.name.clone(),
        "--description".into(),
        label.description.clone(),
        "--color".into(),
        label.color.clone(),
        "--force".into(),
    ];
    push_repo(&mut args, repo);
    args
}

/// `issue create` with one `--label` flag per label name.
pub fn issue_create(issue: &IssueSpec, repo: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "issue".into(),
        "create".into(),
        "--title".into(),
        issue.title.clone(),
        "--body".into(),
        issue.body.clone(),
    ];
    for label in &issue.labels {
        args.push("--label".into());
        args.push(label.clone());
    }
    push_repo(&mut args, repo);
    args
}

fn push_repo(args: &mut Vec<String>, repo: Option<&str>) {
    if let Some(repo) = repo {
        args.push("--repo".into());
        args.push(repo.to_string());
    }
}

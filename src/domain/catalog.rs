use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::AppError;
use super::issue::IssueSpec;
use super::label::{LabelSpec, is_valid_color};

/// Labels and issues to seed into a repository.
///
/// Issues reference labels by name; [`Catalog::validate`] enforces that
/// every reference resolves before anything is sent to the tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub labels: Vec<LabelSpec>,
    #[serde(default)]
    pub issues: Vec<IssueSpec>,
}

impl Catalog {
    /// The built-in RealWorld implementation plan.
    pub fn builtin() -> Self {
        super::builtin::catalog()
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        toml::from_str(content)
            .map_err(|e| AppError::ParseError { what: "catalog".into(), details: e.to_string() })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|source| AppError::CatalogLoad { path: path.to_path_buf(), source })?;
        Self::from_toml(&content)
    }

    /// Check catalog invariants, collecting every violation.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut problems = Vec::new();
        let mut names = HashSet::new();

        for label in &self.labels {
            if label.name.trim().is_empty() {
                problems.push("label with empty name".to_string());
                continue;
            }
            if !names.insert(label.name.as_str()) {
                problems.push(format!("duplicate label '{}'", label.name));
            }
            if !is_valid_color(&label.color) {
                problems.push(format!(
                    "label '{}' has invalid color '{}' (expected 6 hex digits)",
                    label.name, label.color
                ));
            }
        }

        for (index, issue) in self.issues.iter().enumerate() {
            if issue.title.trim().is_empty() {
                problems.push(format!("issue #{} has an empty title", index + 1));
            }
            for label in &issue.labels {
                if !names.contains(label.as_str()) {
                    problems.push(format!(
                        "issue '{}' references unknown label '{}'",
                        issue.title, label
                    ));
                }
            }
        }

        if problems.is_empty() { Ok(()) } else { Err(AppError::InvalidCatalog(problems)) }
    }
}

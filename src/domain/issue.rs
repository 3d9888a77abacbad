use serde::Deserialize;

/// An issue to open, tagged with label names from the same catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueSpec {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl IssueSpec {
    pub fn new(title: &str, body: &str, labels: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

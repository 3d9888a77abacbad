use serde::Deserialize;

/// A repository label to create or update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Six hex digits without a leading `#`.
    pub color: String,
}

impl LabelSpec {
    pub fn new(name: &str, description: &str, color: &str) -> Self {
        Self { name: name.to_string(), description: description.to_string(), color: color.to_string() }
    }
}

/// Returns true when `color` is exactly six ASCII hex digits.
pub fn is_valid_color(color: &str) -> bool {
    color.len() == 6 && color.bytes().all(|b| b.is_ascii_hexdigit())
}

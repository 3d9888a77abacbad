use std::io::{self, Write};

use crate::domain::Catalog;

/// Print the catalog as copy-paste instructions. Touches nothing external.
pub fn write_manual(catalog: &Catalog, out: &mut dyn Write) -> io::Result<()> {
    let heavy = "=".repeat(80);
    let light = "-".repeat(80);

    writeln!(out, "\n{}", heavy)?;
    writeln!(out, "MANUAL ISSUE CREATION")?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "First, create these labels in your GitHub repository:\n")?;

    for label in &catalog.labels {
        writeln!(out, "- {}: {} (color: #{})", label.name, label.description, label.color)?;
    }

    writeln!(out, "\nThen copy and paste these issues into GitHub Issues manually:\n")?;

    for (index, issue) in catalog.issues.iter().enumerate() {
        writeln!(out, "--- Issue #{}: {} ---", index + 1, issue.title)?;
        writeln!(out, "Labels: {}", issue.labels.join(", "))?;
        writeln!(out, "Body:\n{}", issue.body)?;
        writeln!(out, "\n{}\n", light)?;
    }
    Ok(())
}

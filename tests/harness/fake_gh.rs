use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A shell-script `gh` that logs its arguments and answers like the real CLI.
///
/// Behavior is steered through environment variables passed to the CLI under test:
/// - `FAKE_GH_AUTH=fail` makes `auth status` exit 1
/// - `FAKE_GH_EXISTING_LABEL=<name>` makes `label create <name>` report "already exists"
/// - `FAKE_GH_FAIL_TITLE=<title>` makes `issue create` for that title exit 1
pub struct FakeGh {
    pub bin_dir: PathBuf,
    pub path: PathBuf,
    pub log_file: PathBuf,
}

impl FakeGh {
    pub fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.join("gh.log");
        let path = bin_dir.join("gh");

        // Each invocation logs its first four arguments, pipe-separated.
        let script = format!(
            r#"#!/bin/sh
printf '%s|%s|%s|%s\n' "$1" "$2" "$3" "$4" >> "{log}"

case "$1" in
    --version)
        echo "gh version 2.40.0 (fake)"
        ;;
    auth)
        if [ "$FAKE_GH_AUTH" = "fail" ]; then
            echo "You are not logged into any GitHub hosts. Run gh auth login to authenticate." >&2
            exit 1
        fi
        echo "Logged in to github.com"
        ;;
    label)
        if [ -n "$FAKE_GH_EXISTING_LABEL" ] && [ "$3" = "$FAKE_GH_EXISTING_LABEL" ]; then
            echo "label with name \"$3\" already exists" >&2
            exit 1
        fi
        ;;
    issue)
        if [ -n "$FAKE_GH_FAIL_TITLE" ] && [ "$4" = "$FAKE_GH_FAIL_TITLE" ]; then
            echo "GraphQL: Could not resolve to a Repository" >&2
            exit 1
        fi
        echo "https://github.com/owner/repo/issues/456"
        ;;
esac

exit 0
"#,
            log = log_file.display()
        );

        fs::write(&path, script).expect("Failed to write gh script");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");

        Self { bin_dir, path, log_file }
    }

    /// Logged invocations, one entry per call.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls().into_iter().filter(|c| c.starts_with(prefix)).collect()
    }
}

//! Shared testing harness for `seed-issues` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeGh;

/// Isolated environment with a fake `gh` installed in a private bin directory.
pub(crate) struct TestContext {
    root: TempDir,
    gh: FakeGh,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let gh = FakeGh::install(root.path());
        Self { root, gh }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn gh(&self) -> &FakeGh {
        &self.gh
    }

    /// Command for the compiled binary with only the fake bin dir and system dirs on PATH.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("seed-issues").expect("Failed to locate seed-issues binary");
        let path = format!("{}:/usr/bin:/bin", self.gh.bin_dir.display());
        cmd.current_dir(self.root())
            .env("PATH", path)
            .env_remove("RUST_LOG")
            .env_remove("FAKE_GH_AUTH")
            .env_remove("FAKE_GH_EXISTING_LABEL")
            .env_remove("FAKE_GH_FAIL_TITLE");
        cmd
    }

    /// Like [`cli`](Self::cli) but pointing `--gh` at the fake explicitly.
    pub(crate) fn cli_with_fake_gh(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--gh").arg(&self.gh.path);
        cmd
    }

    /// Write a catalog file into the test root and return its path.
    pub(crate) fn write_catalog(&self, content: &str) -> PathBuf {
        let path = self.root().join("catalog.toml");
        fs::write(&path, content).expect("Failed to write catalog");
        path
    }
}

use crate::domain::Timeouts;
use crate::ports::ToolRunner;

/// A located GitHub CLI plus everything needed to invoke it.
pub struct GhSession<'a> {
    pub runner: &'a dyn ToolRunner,
    /// Path or bare name that passed the version probe.
    pub gh: &'a str,
    /// Target repository forwarded as `--repo`; `None` lets gh infer it.
    pub repo: Option<&'a str>,
    pub timeouts: Timeouts,
}

impl<'a> GhSession<'a> {
    pub fn new(runner: &'a dyn ToolRunner, gh: &'a str) -> Self {
        Self { runner, gh, repo: None, timeouts: Timeouts::default() }
    }

    pub fn with_repo(mut self, repo: Option<&'a str>) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

use std::io::Write;

use crate::app::context::GhSession;
use crate::domain::{AppError, InvocationError, gh_args};

/// Outcome of `gh auth status`.
#[derive(Debug)]
pub enum AuthStatus {
    Authenticated,
    NotAuthenticated,
    /// The status check itself could not complete (spawn failure, timeout).
    CheckFailed(InvocationError),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

/// Run the authentication gate and report the result.
pub fn check_auth(session: &GhSession<'_>, out: &mut dyn Write) -> Result<AuthStatus, AppError> {
    let status = match session.runner.run(
        session.gh,
        &gh_args::auth_status(),
        session.timeouts.auth_status,
    ) {
        Ok(output) if output.success => AuthStatus::Authenticated,
        Ok(_) => AuthStatus::NotAuthenticated,
        Err(e) => AuthStatus::CheckFailed(e),
    };

    match &status {
        AuthStatus::Authenticated => writeln!(out, "[SUCCESS] GitHub CLI authenticated")?,
        AuthStatus::NotAuthenticated => {
            writeln!(out, "[ERROR] GitHub CLI not authenticated. Please run: gh auth login")?;
            writeln!(out, "Authentication is required to create issues.")?;
        }
        AuthStatus::CheckFailed(e) => {
            writeln!(out, "[ERROR] Error checking GitHub CLI auth status: {}", e)?;
            writeln!(out, "Please ensure GitHub CLI is installed and authenticated")?;
        }
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGh, failed};
    use std::time::Duration;

    fn run(fake: &FakeGh) -> (AuthStatus, String) {
        let session = GhSession::new(fake, "gh");
        let mut out = Vec::new();
        let status = check_auth(&session, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn authenticated_on_zero_exit() {
        let fake = FakeGh::succeeding();
        let (status, out) = run(&fake);
        assert!(status.is_authenticated());
        assert_eq!(out, "[SUCCESS] GitHub CLI authenticated\n");
        assert_eq!(fake.calls()[0].args, vec!["auth", "status"]);
        assert_eq!(fake.calls()[0].timeout, Duration::from_secs(10));
    }

    #[test]
    fn not_authenticated_on_non_zero_exit() {
        let fake = FakeGh::new(|_, _| Ok(failed("You are not logged into any GitHub hosts.")));
        let (status, out) = run(&fake);
        assert!(matches!(status, AuthStatus::NotAuthenticated));
        assert!(out.starts_with("[ERROR] GitHub CLI not authenticated."));
    }

    #[test]
    fn timeout_fails_the_check() {
        let fake = FakeGh::new(|_, _| Err(InvocationError::Timeout { after: Duration::from_secs(10) }));
        let (status, out) = run(&fake);
        assert!(matches!(status, AuthStatus::CheckFailed(_)));
        assert!(out.contains("[ERROR] Error checking GitHub CLI auth status: timed out after 10s"));
    }
}

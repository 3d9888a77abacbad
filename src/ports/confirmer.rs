use crate::domain::AppError;

/// Port for yes/no confirmation before mutating calls.
pub trait Confirmer {
    /// Ask `prompt`; anything other than an explicit yes is a no.
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError>;
}

/// Confirmer that always accepts (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, AppError> {
        Ok(true)
    }
}

mod builtin;
pub mod catalog;
pub mod error;
pub mod gh_args;
pub mod issue;
pub mod label;
pub mod outcome;

pub use catalog::Catalog;
pub use error::{AppError, InvocationError};
pub use gh_args::{DEFAULT_GH_CANDIDATES, Timeouts};
pub use issue::IssueSpec;
pub use label::LabelSpec;
pub use outcome::{FailureReason, IssueOutcome, LabelOutcome, SeedSummary};

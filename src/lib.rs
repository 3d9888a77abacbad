//! seed-issues: create GitHub labels and issues for a fixed project plan through the gh CLI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::commands::seed::{SeedOptions, SeedResult};
pub use domain::{AppError, Catalog, IssueSpec, LabelSpec};

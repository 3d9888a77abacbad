pub mod cli;
pub mod commands;
pub mod context;

pub use context::GhSession;

mod confirmer;
mod tool_runner;

pub use confirmer::{AssumeYes, Confirmer};
pub use tool_runner::{ToolOutput, ToolRunner};

pub mod console_confirmer;
pub mod process_runner;

pub use console_confirmer::{ConsoleConfirmer, LineConfirmer};
pub use process_runner::ProcessToolRunner;

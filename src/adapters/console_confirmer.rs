use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::Confirmer;

/// Asks on the terminal via dialoguer, or reads a line when stdin is piped.
#[derive(Debug, Default)]
pub struct ConsoleConfirmer;

impl ConsoleConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for ConsoleConfirmer {
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            // dialoguer renders on stderr; only the blank separator line goes to stdout.
            println!();
            let answer = Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact_opt()
                .map_err(|e| AppError::Prompt(e.to_string()))?;
            return Ok(answer.unwrap_or(false));
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        LineConfirmer::new(stdin.lock(), &mut stdout).confirm(prompt)
    }
}

/// Plain `(y/N)` prompt over arbitrary reader/writer.
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        write!(self.output, "\n{} (y/N): ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(is_yes(&line))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

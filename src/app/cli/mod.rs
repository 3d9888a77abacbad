//! CLI Adapter.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::adapters::{ConsoleConfirmer, ProcessToolRunner};
use crate::app::commands::seed::{self, SeedOptions};
use crate::domain::{AppError, Timeouts};
use crate::ports::{AssumeYes, Confirmer};

#[derive(Parser)]
#[command(name = "seed-issues")]
#[command(version)]
#[command(
    about = "Create GitHub labels and issues for the RealWorld implementation plan via the gh CLI",
    long_about = None
)]
struct Cli {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long, conflicts_with = "manual")]
    yes: bool,
    /// Only print labels and issues for manual creation
    #[arg(short = 'm', long)]
    manual: bool,
    /// Path to the gh executable (skips the default search)
    #[arg(long, value_name = "PATH")]
    gh: Option<String>,
    /// Target repository, forwarded to gh
    #[arg(short = 'R', long, value_name = "OWNER/REPO")]
    repo: Option<String>,
    /// Load labels and issues from a TOML file instead of the built-in plan
    #[arg(short = 'c', long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Log each gh invocation to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_seed(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_seed(cli: Cli) -> Result<i32, AppError> {
    let options = SeedOptions {
        catalog: cli.catalog,
        gh: cli.gh,
        repo: cli.repo,
        manual: cli.manual,
        timeouts: Timeouts::default(),
    };

    let runner = ProcessToolRunner::new();
    let mut confirmer: Box<dyn Confirmer> =
        if cli.yes { Box::new(AssumeYes) } else { Box::new(ConsoleConfirmer::new()) };
    let mut stdout = io::stdout();

    let result = seed::execute(&options, &runner, confirmer.as_mut(), &mut stdout)?;
    Ok(result.exit_code())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("seed_issues=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

mod commands;
mod environment;
mod error;
mod interaction;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::commands::Commands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "lockstep")]
#[command(version = env!("LOCKSTEP_VERSION"))]
#[command(about = "Keep every package in a monorepo on one shared version", long_about = None)]
struct Cli {
    /// Directory to discover the project from (defaults to the working directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let start_path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };
    cli.command.execute(&start_path)
}

fn print_error(error: &CliError) {
    use std::error::Error as _;

    eprintln!("error: {error}");
    let mut cause = error.source();
    while let Some(inner) = cause {
        eprintln!("caused by: {inner}");
        cause = inner.source();
    }
}

mod commands;
mod helpers;

use clap::Parser;
use titrate_core::domain::TitrationError;
use titrate_core::report::ReportError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "titrate-rs", about = "Titration curve analyzer")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Analyze a titration data file and write the report artifacts
    Analyze(commands::AnalyzeArgs),
    /// List the built-in standard reference pKa values
    Standards,
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Analyze(args) => commands::run_analyze_command(args),
        CliCommand::Standards => commands::run_standards_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Analysis(TitrationError),
    #[error("{0}")]
    Report(ReportError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Analysis(error) => error.exit_code(),
            Self::Report(_) | Self::Internal(_) => 3,
        }
    }

    fn diagnostic_line(&self) -> String {
        match self {
            Self::Analysis(error) => error.diagnostic_line(),
            Self::Internal(error) => format!("ERROR: {error:#}"),
            other => format!("ERROR: {other}"),
        }
    }
}

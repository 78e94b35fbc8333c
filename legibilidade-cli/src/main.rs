//! legibilidade - readability scores for Portuguese text

use clap::Parser;
use legibilidade_cli::commands::Commands;
use legibilidade_cli::CliResult;

/// Readability analysis for Portuguese text
#[derive(Debug, Parser)]
#[command(name = "legibilidade", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

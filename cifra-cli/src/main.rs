//! Command-line entry point for cifra

use clap::Parser;

use cifra_cli::commands::translate::Direction;
use cifra_cli::commands::{list, Commands};

/// Reversible shift and substitution ciphers over user-defined alphabets
#[derive(Debug, Parser)]
#[command(name = "cifra", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt(args) => args.execute(Direction::Encrypt),
        Commands::Decrypt(args) => args.execute(Direction::Decrypt),
        Commands::List { subcommand } => list::execute(&subcommand),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

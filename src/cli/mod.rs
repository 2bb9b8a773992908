//! Command-line interface.

mod commands;

use clap::{Parser, Subcommand};

use crate::config::{FetchSettings, ServerSettings};

#[derive(Parser)]
#[command(name = "jsvendor")]
#[command(about = "Vendor CDN JavaScript modules and serve them locally")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Download the pinned JavaScript dependencies into ./js
    Fetch,

    /// Serve the current directory at http://localhost:8000
    Serve,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch => commands::cmd_fetch(&FetchSettings::default()).await,
        Commands::Serve => commands::cmd_serve(&ServerSettings::default()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["jsvendor", "fetch"]).unwrap();
        assert!(matches!(cli.command, Commands::Fetch));
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["jsvendor", "-v", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["jsvendor", "serve", "--port", "9000"]).is_err());
    }
}

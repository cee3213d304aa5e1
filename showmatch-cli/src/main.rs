//! Showmatch CLI - Command-line interface
//!
//! Resolves show names against a recorded search catalog.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use showmatch_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "showmatch")]
#[command(about = "Resolve ambiguous TV show names to a single show")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Recorded search catalog (JSON)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    /// Write a full trace log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.log_file.as_deref())?;

    commands::handle_command(cli.command, &cli.catalog).await
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::commands::Commands;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find_collects_words() {
        let cli = Cli::parse_from(["showmatch", "-c", "shows.json", "find", "the", "office", "us"]);

        assert_eq!(cli.catalog, PathBuf::from("shows.json"));
        assert_eq!(cli.log_level, CliLogLevel::Warn);
        assert!(matches!(cli.command, Commands::Find { ref text } if text.len() == 3));
    }

    #[test]
    fn test_parse_resolve_qualifiers() {
        let cli = Cli::parse_from([
            "showmatch",
            "--catalog",
            "shows.json",
            "--log-level",
            "debug",
            "resolve",
            "utopia",
            "--year",
            "2014",
            "--country",
            "au",
            "--web-channel",
            "Netflix",
        ]);

        assert_eq!(cli.log_level, CliLogLevel::Debug);
        match cli.command {
            Commands::Resolve {
                name,
                year,
                country,
                web_channel,
                network,
                ..
            } => {
                assert_eq!(name, "utopia");
                assert_eq!(year, Some(2014));
                assert_eq!(country.as_deref(), Some("au"));
                assert_eq!(web_channel.as_deref(), Some("Netflix"));
                assert!(network.is_none());
            }
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn test_catalog_is_required() {
        assert!(Cli::try_parse_from(["showmatch", "find", "lost"]).is_err());
    }
}

//! RoomGuard CLI - inspect protections and check their configuration.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "roomguard")]
#[command(about = "RoomGuard - room moderation protections")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available protections
    List,

    /// Show a protection and its current settings
    Show {
        /// Protection name
        name: String,

        /// Config file (defaults to ~/.roomguard/roomguard.json)
        #[arg(long, env = "ROOMGUARD_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Check a config file against the registered protections
    Check {
        /// Config file (defaults to ~/.roomguard/roomguard.json)
        #[arg(long, env = "ROOMGUARD_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    match cli.command {
        Commands::List => commands::run_list()?,

        Commands::Show { name, config } => {
            let args = commands::show::ShowArgs { name, config };
            commands::run_show(args)?;
        }

        Commands::Check { config } => {
            let args = commands::check::CheckArgs { config };
            commands::run_check(args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "roomguard",
            "show",
            "BasicFloodingProtection",
            "--config",
            "/tmp/roomguard.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Show { name, config } => {
                assert_eq!(name, "BasicFloodingProtection");
                assert_eq!(config, Some(PathBuf::from("/tmp/roomguard.json")));
            }
            _ => panic!("expected show"),
        }
    }

    fn check(source: &str) -> anyhow::Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("roomguard.json");
        std::fs::write(&path, source).unwrap();

        commands::run_check(commands::check::CheckArgs { config: Some(path) })
    }

    #[test]
    fn test_check_reports_problems() {
        let err = check(
            r"{ protections: {
                NoSuchProtection: {},
                BasicFloodingProtection: { settings: { maxPerMinute: -1 } },
            } }",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "2 problem(s) found");
    }

    #[test]
    fn test_check_counts_each_rejected_setting() {
        let err = check(
            r"{ protections: {
                BasicFloodingProtection: { settings: { bogus: 1, maxPerMinute: 5000 } },
            } }",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "2 problem(s) found");
    }

    #[test]
    fn test_check_accepts_valid_config() {
        check(
            r"{ protections: {
                BasicFloodingProtection: { settings: { maxPerMinute: 60 } },
            } }",
        )
        .unwrap();
    }
}

//! nasctl CLI - Manage a NAS share mount
//!
//! This module contains the shared CLI implementation: argument parsing,
//! command dispatch, and process exit-code mapping.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use nasctl_core::config::FileConfigStore;
use nasctl_core::mount::MountExecutor;
use nasctl_core::{ConfigStore, get_version_long};

/// Manage a single NAS share mount
#[derive(Parser)]
#[command(name = "nasctl")]
#[command(version = get_version_long())]
#[command(about = "Configure, mount, and inspect a NAS share", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the share connection parameters
    Configure(commands::ConfigureArgs),
    /// Mount the configured share
    Mount(commands::MountArgs),
    /// Unmount the configured share
    Umount(commands::UmountArgs),
    /// Show whether the share is currently mounted
    Status(commands::StatusArgs),
}

pub fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nasctl=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let store = match FileConfigStore::from_default_path() {
        Ok(store) => store,
        Err(e) => {
            output::show_error(&anyhow::Error::new(e));
            std::process::exit(1);
        }
    };
    let executor = MountExecutor::new();

    tracing::debug!("Using config at {}", store.location());

    if cli.verbose > 0 {
        eprintln!("{} Config: {}", style("[info]").cyan(), store.location());
    }

    let result = match cli.command {
        Commands::Configure(args) => commands::cmd_configure(&store, args, cli.quiet),
        Commands::Mount(args) => commands::cmd_mount(&store, &executor, &args, cli.quiet),
        Commands::Umount(args) => commands::cmd_umount(&store, &executor, &args, cli.quiet),
        Commands::Status(args) => commands::cmd_status(&store, &args, cli.quiet),
    };

    if let Err(err) = result {
        output::show_error(&err);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn configure_vers_defaults_to_2_1() {
        let cli = Cli::try_parse_from([
            "nasctl",
            "configure",
            "--ip",
            "10.0.0.5",
            "--share",
            "media",
            "--mountpoint",
            "/mnt/nas",
            "--username",
            "alice",
            "--password",
            "secret",
        ])
        .unwrap();

        match cli.command {
            Commands::Configure(args) => assert_eq!(args.vers, "2.1"),
            _ => panic!("expected configure subcommand"),
        }
    }

    #[test]
    fn configure_missing_required_flag_is_usage_error() {
        let result = Cli::try_parse_from([
            "nasctl",
            "configure",
            "--share",
            "media",
            "--mountpoint",
            "/mnt/nas",
            "--username",
            "alice",
            "--password",
            "secret",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_subcommand_is_usage_error() {
        assert!(Cli::try_parse_from(["nasctl"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_usage_error() {
        assert!(Cli::try_parse_from(["nasctl", "remount"]).is_err());
    }

    #[test]
    fn mount_takes_no_flags() {
        assert!(Cli::try_parse_from(["nasctl", "mount"]).is_ok());
        assert!(Cli::try_parse_from(["nasctl", "mount", "--ip", "10.0.0.5"]).is_err());
    }
}

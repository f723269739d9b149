//! Mount command implementation
//!
//! Loads the persisted configuration and attaches the share at its
//! configured mount point.

use anyhow::Result;
use clap::Args;
use console::style;
use nasctl_core::config::ConfigStore;
use nasctl_core::mount::MountExecutor;

/// Arguments for the mount command
#[derive(Args, Debug)]
pub struct MountArgs {}

/// Mount the configured share
///
/// Configuration errors surface before any OS command is attempted.
pub fn cmd_mount(
    store: &dyn ConfigStore,
    executor: &MountExecutor,
    _args: &MountArgs,
    quiet: bool,
) -> Result<()> {
    let config = store.load()?;
    executor.mount(&config)?;

    if !quiet {
        println!(
            "Mounted {} at {}",
            style(&config.share).cyan(),
            style(config.mountpoint.display()).cyan()
        );
    }
    Ok(())
}

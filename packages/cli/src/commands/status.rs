//! Status command implementation
//!
//! Reports whether the configured mount point is live in the kernel mount
//! table. Mounted or not, reporting itself succeeding means exit 0; only a
//! missing config or an unreadable mount table is a failure.

use anyhow::Result;
use clap::Args;
use console::style;
use nasctl_core::config::ConfigStore;
use nasctl_core::mount::is_mounted;

use crate::output::mount_state_style;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

/// Show whether the configured share is currently mounted
pub fn cmd_status(store: &dyn ConfigStore, _args: &StatusArgs, _quiet: bool) -> Result<()> {
    let config = store.load()?;
    let mounted = is_mounted(&config.mountpoint)?;

    // The state line is the command's output; -q does not suppress it.
    if mounted {
        println!(
            "NAS is {} at {}",
            mount_state_style("mounted"),
            style(config.mountpoint.display()).cyan()
        );
    } else {
        println!("NAS is {}", mount_state_style("not mounted"));
    }
    Ok(())
}

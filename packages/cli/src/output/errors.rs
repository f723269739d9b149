//! Centralized error rendering
//!
//! Maps typed core errors to the Error:/Tip: stderr format so every command
//! fails the same way.

use console::style;
use nasctl_core::config::ConfigError;
use nasctl_core::mount::MountError;

/// Print an error with a contextual tip where one exists
pub fn show_error(err: &anyhow::Error) {
    eprintln!("{} {err}", style("Error:").red().bold());

    if let Some(config_err) = err.downcast_ref::<ConfigError>() {
        match config_err {
            ConfigError::Missing(_) => {
                eprintln!();
                eprintln!(
                    "  {} Run '{}' to set up the share first.",
                    style("Tip:").cyan(),
                    style("nasctl configure").green()
                );
            }
            ConfigError::Corrupt { path, .. } => {
                eprintln!();
                eprintln!(
                    "  {} Fix the file or re-run '{}' to replace it:",
                    style("Tip:").cyan(),
                    style("nasctl configure").green()
                );
                eprintln!("       {}", style(path.display()).yellow());
            }
            _ => {}
        }
    } else if let Some(MountError::PrivilegeDenied(_)) = err.downcast_ref::<MountError>() {
        eprintln!();
        eprintln!(
            "  {} Mounting needs root; make sure sudo is installed and your user may run it.",
            style("Tip:").cyan()
        );
    }
}

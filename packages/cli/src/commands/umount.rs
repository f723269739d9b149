//! Umount command implementation
//!
//! Loads the persisted configuration and detaches the share from its
//! configured mount point. The configuration file itself is never touched.

use anyhow::Result;
use clap::Args;
use console::style;
use nasctl_core::config::ConfigStore;
use nasctl_core::mount::MountExecutor;

/// Arguments for the umount command
#[derive(Args, Debug)]
pub struct UmountArgs {}

/// Unmount the configured share
pub fn cmd_umount(
    store: &dyn ConfigStore,
    executor: &MountExecutor,
    _args: &UmountArgs,
    quiet: bool,
) -> Result<()> {
    let config = store.load()?;
    executor.unmount(&config.mountpoint)?;

    if !quiet {
        println!("Unmounted {}", style(config.mountpoint.display()).cyan());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nasctl_core::config::{ConfigError, MemoryConfigStore};

    #[test]
    fn umount_without_config_fails_before_any_os_call() {
        let store = MemoryConfigStore::new();
        let err = cmd_umount(&store, &MountExecutor::new(), &UmountArgs {}, true).unwrap_err();

        let config_err = err
            .downcast_ref::<ConfigError>()
            .expect("error should be a ConfigError");
        assert!(matches!(config_err, ConfigError::Missing(_)));
    }
}

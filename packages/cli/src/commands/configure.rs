//! Configure command implementation
//!
//! Persists the share connection parameters, replacing any previous
//! configuration in full.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use nasctl_core::config::{ConfigStore, DEFAULT_SMB_VERSION, MountConfig};

/// Arguments for the configure command
#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// NAS IP address or hostname
    #[arg(long)]
    pub ip: String,

    /// Share name exported by the NAS
    #[arg(long)]
    pub share: String,

    /// Local mount point
    #[arg(long)]
    pub mountpoint: PathBuf,

    /// Username for the share
    #[arg(long)]
    pub username: String,

    /// Password for the share (stored with owner-only file permissions)
    #[arg(long)]
    pub password: String,

    /// SMB version
    #[arg(long, default_value = DEFAULT_SMB_VERSION)]
    pub vers: String,
}

/// Persist a new mount configuration
pub fn cmd_configure(store: &dyn ConfigStore, args: ConfigureArgs, quiet: bool) -> Result<()> {
    let config = MountConfig {
        ip: args.ip,
        share: args.share,
        mountpoint: args.mountpoint,
        username: args.username,
        password: args.password,
        vers: args.vers,
    };

    store.save(&config)?;

    if !quiet {
        println!(
            "Configuration saved to {}",
            style(store.location()).cyan()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nasctl_core::config::MemoryConfigStore;

    fn args() -> ConfigureArgs {
        ConfigureArgs {
            ip: "10.0.0.5".to_string(),
            share: "media".to_string(),
            mountpoint: PathBuf::from("/mnt/nas"),
            username: "alice".to_string(),
            password: "secret".to_string(),
            vers: "2.1".to_string(),
        }
    }

    #[test]
    fn configure_saves_all_fields() {
        let store = MemoryConfigStore::new();
        cmd_configure(&store, args(), true).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.ip, "10.0.0.5");
        assert_eq!(config.share, "media");
        assert_eq!(config.mountpoint, PathBuf::from("/mnt/nas"));
        assert_eq!(config.username, "alice");
        assert_eq!(config.password, "secret");
        assert_eq!(config.vers, "2.1");
    }

    #[test]
    fn configure_replaces_existing_config() {
        let store = MemoryConfigStore::new();
        cmd_configure(&store, args(), true).unwrap();

        let mut second = args();
        second.share = "backups".to_string();
        second.vers = "3.0".to_string();
        cmd_configure(&store, second, true).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.share, "backups");
        assert_eq!(config.vers, "3.0");
    }
}

//! XDG-compliant path resolution for nasctl
//!
//! The config file lives under `~/.config/nasctl/` on Linux and macOS.
//! nasctl drives mount(8)/umount(8) and reads the kernel mount table, so
//! other platforms are unsupported and resolve to `None`.

use std::path::PathBuf;

/// Get the configuration directory path
///
/// Returns the directory where config.json is stored:
/// - Linux: `~/.config/nasctl/`
/// - macOS: `~/.config/nasctl/` (XDG-style, not ~/Library)
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("nasctl"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Returns: `{config_dir}/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}

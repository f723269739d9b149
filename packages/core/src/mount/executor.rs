//! Privileged mount and unmount execution
//!
//! Wraps mount(8)/umount(8) behind sudo. Arguments are passed as a vector,
//! so credential and path values containing shell metacharacters cannot
//! change the command's meaning.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

use super::error::MountError;
use crate::config::MountConfig;

/// Filesystem type passed to mount(8)
const FS_TYPE: &str = "cifs";

/// Executes privileged mount operations via sudo
#[derive(Debug, Clone, Copy, Default)]
pub struct MountExecutor;

impl MountExecutor {
    /// Create a new MountExecutor
    pub fn new() -> Self {
        Self
    }

    /// Attach the configured share at its mount point
    ///
    /// Creates the mount point directory (and parents) first. If the mount
    /// itself then fails, the created directory is left in place.
    ///
    /// The underlying call may block indefinitely, e.g. on an unreachable
    /// host; no timeout is imposed.
    pub fn mount(&self, config: &MountConfig) -> Result<(), MountError> {
        fs::create_dir_all(&config.mountpoint).map_err(|e| {
            MountError::Mount(format!(
                "failed to create mount point {}: {e}",
                config.mountpoint.display()
            ))
        })?;

        let source = config.unc_source();
        let options = config.mount_options();
        tracing::debug!(
            "Mounting {} at {} (vers={})",
            source,
            config.mountpoint.display(),
            config.vers
        );

        let output = run_privileged(&[
            OsStr::new("mount"),
            OsStr::new("-t"),
            OsStr::new(FS_TYPE),
            OsStr::new(&source),
            config.mountpoint.as_os_str(),
            OsStr::new("-o"),
            OsStr::new(&options),
        ])?;
        check_output(output, MountError::Mount)
    }

    /// Detach the filesystem mounted at `mountpoint`
    pub fn unmount(&self, mountpoint: &Path) -> Result<(), MountError> {
        tracing::debug!("Unmounting {}", mountpoint.display());

        let output = run_privileged(&[OsStr::new("umount"), mountpoint.as_os_str()])?;
        check_output(output, MountError::Unmount)
    }
}

/// Run a command under sudo and capture its output
fn run_privileged(args: &[&OsStr]) -> Result<Output, MountError> {
    Command::new("sudo")
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                MountError::PrivilegeDenied("sudo not found on PATH".to_string())
            }
            _ => MountError::PrivilegeDenied(format!("failed to run sudo: {e}")),
        })
}

/// Map a non-zero exit into a typed error carrying the OS diagnostic verbatim
fn check_output(output: Output, wrap: impl FnOnce(String) -> MountError) -> Result<(), MountError> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if sudo_refused(&stderr) {
        return Err(MountError::PrivilegeDenied(stderr));
    }
    Err(wrap(stderr))
}

/// Whether stderr is sudo's own refusal rather than the wrapped command's
/// diagnostic (password required, user not permitted, target binary missing)
fn sudo_refused(stderr: &str) -> bool {
    stderr.starts_with("sudo:") || stderr.contains("is not in the sudoers file")
}

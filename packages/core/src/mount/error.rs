//! Mount-specific error types
//!
//! Errors that can occur while driving the OS mount facilities. Diagnostic
//! text from the underlying commands is carried verbatim, never rewritten.

use thiserror::Error;

/// Errors that can occur during mount and unmount operations
#[derive(Error, Debug)]
pub enum MountError {
    /// Privilege escalation is unavailable or was refused
    #[error("Privilege escalation failed: {0}")]
    PrivilegeDenied(String),

    /// mount(8) reported a failure (or the mount point could not be created)
    #[error("Mount failed: {0}")]
    Mount(String),

    /// umount(8) reported a failure
    #[error("Unmount failed: {0}")]
    Unmount(String),
}

/// Errors that can occur while inspecting the kernel mount table
#[derive(Error, Debug)]
pub enum StatusError {
    /// The live mount table could not be read
    #[error("Could not read mount table {path}: {reason}")]
    Unavailable { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_error_displays_correctly() {
        let err = MountError::PrivilegeDenied("sudo: a password is required".to_string());
        assert!(err.to_string().contains("Privilege escalation failed"));

        let err = MountError::Mount("mount error(13): Permission denied".to_string());
        assert!(err.to_string().contains("mount error(13)"));

        let err = MountError::Unmount("umount: /mnt/nas: target is busy.".to_string());
        assert!(err.to_string().contains("target is busy"));
    }

    #[test]
    fn status_error_displays_correctly() {
        let err = StatusError::Unavailable {
            path: "/proc/self/mounts".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("/proc/self/mounts"));
        assert!(err.to_string().contains("No such file or directory"));
    }
}

//! Kernel mount table inspection
//!
//! Parses `/proc/self/mounts` into discrete records and answers whether a
//! given mount point is live. Matching is exact on the decoded mount-point
//! field: a mount at `/mnt/nas-backup` never matches `/mnt/nas`.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::StatusError;

/// Live view of this process's mounts
pub const MOUNT_TABLE_PATH: &str = "/proc/self/mounts";

/// One record from the kernel mount table
#[derive(Debug, Clone, PartialEq)]
pub struct MountEntry {
    /// Device or remote source (e.g. `//10.0.0.5/media`)
    pub source: String,

    /// Local path the filesystem is attached at
    pub mount_point: PathBuf,

    /// Filesystem type (e.g. `cifs`)
    pub fs_type: String,

    /// Comma-separated mount options
    pub options: String,
}

/// Parse mount-table content into entries
///
/// Lines without the expected field count are skipped. The kernel escapes
/// whitespace and backslashes in the source and mount-point fields as
/// three-digit octal sequences; those are decoded here before any matching.
pub fn parse_mount_table(contents: &str) -> Vec<MountEntry> {
    contents.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<MountEntry> {
    let mut fields = line.split_whitespace();
    let source = fields.next()?;
    let mount_point = fields.next()?;
    let fs_type = fields.next()?;
    let options = fields.next()?;

    Some(MountEntry {
        source: decode_octal_escapes(source),
        mount_point: PathBuf::from(decode_octal_escapes(mount_point)),
        fs_type: fs_type.to_string(),
        options: options.to_string(),
    })
}

/// Decode the kernel's `\NNN` octal escapes (`\040` space, `\011` tab,
/// `\012` newline, `\134` backslash)
fn decode_octal_escapes(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\'
            && i + 3 < bytes.len()
            && bytes[i + 1..i + 4].iter().all(|b| (b'0'..=b'7').contains(b))
        {
            let value =
                (bytes[i + 1] - b'0') * 64 + (bytes[i + 2] - b'0') * 8 + (bytes[i + 3] - b'0');
            out.push(value);
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Find the entry whose mount point equals `mountpoint` exactly
pub fn find_entry(contents: &str, mountpoint: &Path) -> Option<MountEntry> {
    parse_mount_table(contents)
        .into_iter()
        .find(|entry| entry.mount_point == mountpoint)
}

/// Whether `mountpoint` is currently attached, per the live mount table
pub fn is_mounted(mountpoint: &Path) -> Result<bool, StatusError> {
    let contents = fs::read_to_string(MOUNT_TABLE_PATH).map_err(|e| StatusError::Unavailable {
        path: MOUNT_TABLE_PATH.to_string(),
        reason: e.to_string(),
    })?;
    Ok(find_entry(&contents, mountpoint).is_some())
}

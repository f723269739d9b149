//! Mount configuration schema for nasctl
//!
//! Defines the structure and defaults for the persisted config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SMB dialect requested when `--vers` is not supplied
pub const DEFAULT_SMB_VERSION: &str = "2.1";

/// The persisted mount configuration
///
/// Serialized to/from `~/.config/nasctl/config.json`. Exactly one of these
/// exists per installation; `configure` replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MountConfig {
    /// Network address of the NAS
    pub ip: String,

    /// Share name exported by the NAS
    pub share: String,

    /// Local path where the share is attached
    pub mountpoint: PathBuf,

    /// Username for the share
    pub username: String,

    /// Password for the share (plaintext; the file is kept at mode 0600)
    pub password: String,

    /// SMB protocol version (default: "2.1")
    #[serde(default = "default_vers")]
    pub vers: String,
}

fn default_vers() -> String {
    DEFAULT_SMB_VERSION.to_string()
}

impl MountConfig {
    /// Mount source in UNC form: `//<ip>/<share>`
    pub fn unc_source(&self) -> String {
        format!("//{}/{}", self.ip, self.share)
    }

    /// Value passed to mount(8) via `-o`
    ///
    /// mount(8) splits the option string on commas, so a password containing
    /// a comma cannot be represented here.
    pub fn mount_options(&self) -> String {
        format!(
            "username={},password={},vers={}",
            self.username, self.password, self.vers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MountConfig {
        MountConfig {
            ip: "10.0.0.5".to_string(),
            share: "media".to_string(),
            mountpoint: PathBuf::from("/mnt/nas"),
            username: "alice".to_string(),
            password: "secret".to_string(),
            vers: "2.1".to_string(),
        }
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let config = sample();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MountConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_vers_defaults_when_missing() {
        let json = r#"{
            "ip": "10.0.0.5",
            "share": "media",
            "mountpoint": "/mnt/nas",
            "username": "alice",
            "password": "secret"
        }"#;
        let config: MountConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.vers, "2.1");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let json = r#"{"ip": "10.0.0.5", "share": "media"}"#;
        let result: Result<MountConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_unknown_fields() {
        let json = r#"{
            "ip": "10.0.0.5",
            "share": "media",
            "mountpoint": "/mnt/nas",
            "username": "alice",
            "password": "secret",
            "vers": "2.1",
            "unknown_field": "value"
        }"#;
        let result: Result<MountConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_unc_source() {
        assert_eq!(sample().unc_source(), "//10.0.0.5/media");
    }

    #[test]
    fn test_mount_options() {
        assert_eq!(
            sample().mount_options(),
            "username=alice,password=secret,vers=2.1"
        );
    }

    #[test]
    fn test_mount_options_with_custom_vers() {
        let config = MountConfig {
            vers: "3.0".to_string(),
            ..sample()
        };
        assert!(config.mount_options().ends_with("vers=3.0"));
    }
}

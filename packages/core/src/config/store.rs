//! Mount configuration storage
//!
//! `ConfigStore` is the seam between command handlers and the filesystem.
//! Handlers receive a store by reference, so tests substitute the in-memory
//! implementation and never touch the real config file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use jsonc_parser::parse_to_serde_value;

use super::error::ConfigError;
use super::paths::get_config_path;
use super::schema::MountConfig;

/// Access to the persisted mount configuration
pub trait ConfigStore {
    /// Load the persisted configuration
    fn load(&self) -> Result<MountConfig, ConfigError>;

    /// Overwrite the persisted configuration (full replace, no merge)
    fn save(&self, config: &MountConfig) -> Result<(), ConfigError>;

    /// Human-readable location for user-facing messages
    fn location(&self) -> String;
}

/// File-backed store at the per-user config path
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Create a store for an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default per-user path
    pub fn from_default_path() -> Result<Self, ConfigError> {
        let path = get_config_path().ok_or(ConfigError::NoPath)?;
        Ok(Self { path })
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<MountConfig, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::Missing(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::Load(format!("failed to read {}: {e}", self.path.display()))
        })?;

        // Parse through jsonc first so a hand-edited file may carry comments
        let parsed = parse_to_serde_value(&contents, &Default::default())
            .map_err(|e| ConfigError::Corrupt {
                path: self.path.clone(),
                reason: format!("invalid JSON: {e}"),
            })?
            .ok_or_else(|| ConfigError::Corrupt {
                path: self.path.clone(),
                reason: "file is empty".to_string(),
            })?;

        let config: MountConfig =
            serde_json::from_value(parsed).map_err(|e| ConfigError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Loaded mount config from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &MountConfig) -> Result<(), ConfigError> {
        let dir = self.path.parent().ok_or(ConfigError::NoPath)?;
        fs::create_dir_all(dir).map_err(|e| {
            ConfigError::Save(format!(
                "failed to create config directory {}: {e}",
                dir.display()
            ))
        })?;

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::Save(format!("failed to serialize: {e}")))?;

        // Stage in the same directory so the final rename is atomic. The
        // temp file goes to mode 0600 before any bytes land: the config
        // holds a plaintext credential and must never be observable
        // half-written or world-readable at the destination path.
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
            ConfigError::Save(format!("failed to create temp file in {}: {e}", dir.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| ConfigError::Save(format!("failed to set permissions: {e}")))?;
        }

        tmp.write_all(json.as_bytes())
            .map_err(|e| ConfigError::Save(format!("failed to write config: {e}")))?;

        tmp.persist(&self.path).map_err(|e| {
            ConfigError::Save(format!("failed to write {}: {e}", self.path.display()))
        })?;

        tracing::debug!("Saved mount config to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store used by command-handler tests
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    inner: Mutex<Option<MountConfig>>,
}

impl MemoryConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a configuration
    pub fn with_config(config: MountConfig) -> Self {
        Self {
            inner: Mutex::new(Some(config)),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<MountConfig, ConfigError> {
        self.inner
            .lock()
            .expect("config store mutex poisoned")
            .clone()
            .ok_or_else(|| ConfigError::Missing(PathBuf::from("<memory>")))
    }

    fn save(&self, config: &MountConfig) -> Result<(), ConfigError> {
        *self.inner.lock().expect("config store mutex poisoned") = Some(config.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

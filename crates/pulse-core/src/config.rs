//! Application configuration
//!
//! ## Configuration Resolution
//!
//! Settings are resolved in layers, later layers winning:
//! 1. Built-in defaults (data dir `~/.local/share/pulse`, obfuscated storage)
//! 2. Optional override file `{data_dir}/config.toml`
//! 3. Environment (`PULSE_DATA_DIR`, `PULSE_ENCODING`, `PULSE_AUTH_KEY`)
//!
//! Command-line flags are applied on top by the CLI.
//!
//! ```toml
//! [storage]
//! encoding = "plain"
//!
//! [auth]
//! publishable_key = "pk_test_..."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::store::Encoding;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "PULSE_DATA_DIR";

/// Environment variable overriding the storage encoding
pub const ENCODING_ENV: &str = "PULSE_ENCODING";

/// Environment variable holding the authentication provider key
pub const AUTH_KEY_ENV: &str = "PULSE_AUTH_KEY";

/// Name of the override file inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the stored blobs and the override file
    pub data_dir: PathBuf,
    /// How entry blobs are written
    pub encoding: Encoding,
    /// Authentication provider key; absent means guest-only
    pub auth_key: Option<String>,
}

impl Config {
    /// Load from defaults, the override file, and the process environment
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        Self::load_with(data_dir, |name| std::env::var(name).ok())
    }

    /// Load with a custom environment lookup
    pub fn load_with<F>(data_dir: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        let data_dir = data_dir
            .map(Path::to_path_buf)
            .or_else(|| env(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(default_data_dir);

        let mut config = Self {
            data_dir,
            encoding: Encoding::default(),
            auth_key: None,
        };

        let path = config.config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::InvalidData(format!("Failed to read config: {}", e)))?;
            config.apply_file(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
        }

        if let Some(encoding) = env(ENCODING_ENV) {
            config.encoding = encoding.parse().map_err(Error::InvalidData)?;
        }
        if let Some(key) = env(AUTH_KEY_ENV) {
            config.auth_key = Some(key);
        }

        Ok(config)
    }

    /// Path of the override file for this data directory
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn has_auth(&self) -> bool {
        self.auth_key.is_some()
    }

    fn apply_file(&mut self, content: &str) -> Result<()> {
        let raw: RawConfig = toml::from_str(content)?;

        if let Some(storage) = raw.storage {
            if let Some(encoding) = storage.encoding {
                self.encoding = encoding;
            }
        }
        if let Some(auth) = raw.auth {
            if let Some(key) = auth.publishable_key.filter(|k| !k.trim().is_empty()) {
                self.auth_key = Some(key);
            }
        }

        Ok(())
    }
}

/// Default data directory (`~/.local/share/pulse` on Linux)
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("pulse"))
        .unwrap_or_else(|| PathBuf::from(".pulse"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    storage: Option<RawStorage>,
    auth: Option<RawAuth>,
}

#[derive(Debug, Deserialize)]
struct RawStorage {
    encoding: Option<Encoding>,
}

#[derive(Debug, Deserialize)]
struct RawAuth {
    publishable_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_with(Some(tmp.path()), env_from(&[])).unwrap();

        assert_eq!(config.data_dir, tmp.path());
        assert_eq!(config.encoding, Encoding::Obfuscated);
        assert!(!config.has_auth());
    }

    #[test]
    fn test_env_data_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let config = Config::load_with(None, env_from(&[(DATA_DIR_ENV, dir)])).unwrap();
        assert_eq!(config.data_dir, tmp.path());
    }

    #[test]
    fn test_file_then_env() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[storage]\nencoding = \"plain\"\n\n[auth]\npublishable_key = \"pk_file\"\n",
        )
        .unwrap();

        let config = Config::load_with(Some(tmp.path()), env_from(&[])).unwrap();
        assert_eq!(config.encoding, Encoding::Plain);
        assert_eq!(config.auth_key.as_deref(), Some("pk_file"));

        let config = Config::load_with(
            Some(tmp.path()),
            env_from(&[(ENCODING_ENV, "obfuscated"), (AUTH_KEY_ENV, "pk_env")]),
        )
        .unwrap();
        assert_eq!(config.encoding, Encoding::Obfuscated);
        assert_eq!(config.auth_key.as_deref(), Some("pk_env"));
    }

    #[test]
    fn test_blank_env_ignored() {
        let tmp = TempDir::new().unwrap();
        let config =
            Config::load_with(Some(tmp.path()), env_from(&[(AUTH_KEY_ENV, "  ")])).unwrap();
        assert!(config.auth_key.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load_with(Some(tmp.path()), env_from(&[(ENCODING_ENV, "rot13")]));
        assert!(matches!(err, Err(Error::InvalidData(_))));

        fs::write(tmp.path().join(CONFIG_FILE), "[storage]\nencoding = 5\n").unwrap();
        let err = Config::load_with(Some(tmp.path()), env_from(&[]));
        assert!(matches!(err, Err(Error::Toml(_))));
    }
}

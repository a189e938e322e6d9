//! Configuration file handling.
//!
//! The configuration file is stored at `$TABI_HOME/config.json` and holds the
//! few tunable settings of the companion, currently just the yen-to-TWD
//! exchange rate. The same directory also holds the durable storage slots
//! (see [`crate::storage::FileStore`]), so `Config` is the root object from
//! which commands obtain their store.

use crate::storage::FileStore;
use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tabi";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// Yen to New Taiwan Dollar, fixed when the trip was planned.
const DEFAULT_EXCHANGE_RATE: f64 = 0.215;

/// Represents the `$TABI_HOME` data directory and the settings loaded from
/// `config.json` inside it.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Loads the configuration, creating the home directory and a default
    /// `config.json` on first use.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or an existing
    /// config file cannot be read or fails validation.
    pub async fn load_or_init(tabi_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = tabi_home.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the tabi home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        let config_file = if config_path.is_file() {
            ConfigFile::load(&config_path).await?
        } else {
            let config_file = ConfigFile::default();
            config_file.save(&config_path).await?;
            config_file
        };

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exchange_rate(&self) -> f64 {
        self.config_file.exchange_rate
    }

    /// The durable key-value store rooted in the home directory.
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.root)
    }
}

/// The serialization format of `config.json`.
///
/// Example:
/// ```json
/// {
///   "app_name": "tabi",
///   "config_version": 1,
///   "exchange_rate": 0.215
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "tabi".
    app_name: String,

    /// Configuration file version.
    config_version: u8,

    /// Yen-to-TWD conversion rate used by `tabi convert`.
    exchange_rate: f64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}

impl ConfigFile {
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;
        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        Ok(config)
    }

    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(path, data)
            .await
            .context("Unable to write config file")
    }
}

use crate::configuration::{CONFIG_DIR_ENV, DEFAULT_APPLICATION_ID};
use crate::keyring::{entry_name, KeyringError, TokenStore};
use dirs::config_dir;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const DEV_CREDENTIALS_FILE_NAME: &str = "dev_credentials.json";

#[derive(Debug, Error)]
pub enum DevKeyringError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("failed to resolve the configuration directory")]
    NoConfigurationDirectory,
}

/// Plain JSON file of `entry -> secret`, for development builds only
#[derive(Debug, Clone)]
pub struct DevKeyring {
    file_path: PathBuf,
}

impl DevKeyring {
    pub fn with_path(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// The credentials file in the same directory as the configuration file
    pub fn try_default() -> Result<Self, DevKeyringError> {
        let mut file_path = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let mut dir = config_dir().ok_or(DevKeyringError::NoConfigurationDirectory)?;
                dir.push(DEFAULT_APPLICATION_ID);
                dir
            }
        };
        file_path.push(DEV_CREDENTIALS_FILE_NAME);
        Ok(Self::with_path(file_path))
    }

    fn load(&self) -> Result<BTreeMap<String, String>, DevKeyringError> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.file_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, credentials: &BTreeMap<String, String>) -> Result<(), DevKeyringError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, serde_json::to_string_pretty(credentials)?)?;
        Ok(())
    }

    pub fn get(&self, entry: &str) -> Result<Option<String>, DevKeyringError> {
        Ok(self.load()?.get(entry).cloned())
    }

    pub fn put(&self, entry: &str, value: &str) -> Result<(), DevKeyringError> {
        let mut credentials = self.load()?;
        credentials.insert(entry.to_string(), value.to_string());
        self.save(&credentials)
    }

    pub fn delete(&self, entry: &str) -> Result<(), DevKeyringError> {
        let mut credentials = self.load()?;
        if credentials.remove(entry).is_some() {
            self.save(&credentials)?;
        }
        Ok(())
    }
}

impl TokenStore for DevKeyring {
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, KeyringError> {
        Ok(DevKeyring::get(self, &entry_name(profile, key))?)
    }

    fn put(&self, profile: &str, key: &str, value: &str) -> Result<(), KeyringError> {
        Ok(DevKeyring::put(self, &entry_name(profile, key), value)?)
    }

    fn delete(&self, profile: &str, key: &str) -> Result<(), KeyringError> {
        Ok(DevKeyring::delete(self, &entry_name(profile, key))?)
    }
}

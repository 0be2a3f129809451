//! Secret storage for the API token.
//!
//! The OS keyring is used by default. Building with the `dev-keyring` feature
//! swaps it for a JSON file next to the configuration (see [`crate::dev_keyring`]),
//! which is handy on headless machines without a secret service.
//!
//! Tokens are kept per account: the entry name is `<account>:<key>`.

#[cfg(feature = "dev-keyring")]
use crate::dev_keyring::DevKeyring;
use thiserror::Error;

pub const KEYRING_SERVICE: &str = "zcli";

#[derive(Debug, Error)]
pub enum KeyringError {
    #[error("keyring error: {0}")]
    KeyringAccessError(#[from] keyring::Error),
    #[error("credential file error: {0}")]
    DevKeyringError(#[from] crate::dev_keyring::DevKeyringError),
}

/// Where API tokens are kept, one entry per account profile and key
pub trait TokenStore {
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, KeyringError>;
    fn put(&self, profile: &str, key: &str, value: &str) -> Result<(), KeyringError>;
    /// Deleting a missing entry is not an error
    fn delete(&self, profile: &str, key: &str) -> Result<(), KeyringError>;
}

#[derive(Debug, Default)]
pub struct Keyring {}

pub(crate) fn entry_name(profile: &str, key: &str) -> String {
    [profile, key].join(":")
}

#[cfg(not(feature = "dev-keyring"))]
impl TokenStore for Keyring {
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, KeyringError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, &entry_name(profile, key))?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(KeyringError::from(e)),
        }
    }

    fn put(&self, profile: &str, key: &str, value: &str) -> Result<(), KeyringError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, &entry_name(profile, key))?;
        entry.set_password(value)?;
        Ok(())
    }

    fn delete(&self, profile: &str, key: &str) -> Result<(), KeyringError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, &entry_name(profile, key))?;
        match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(KeyringError::from(e)),
        }
    }
}

#[cfg(feature = "dev-keyring")]
impl TokenStore for Keyring {
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, KeyringError> {
        TokenStore::get(&DevKeyring::try_default()?, profile, key)
    }

    fn put(&self, profile: &str, key: &str, value: &str) -> Result<(), KeyringError> {
        TokenStore::put(&DevKeyring::try_default()?, profile, key, value)
    }

    fn delete(&self, profile: &str, key: &str) -> Result<(), KeyringError> {
        TokenStore::delete(&DevKeyring::try_default()?, profile, key)
    }
}

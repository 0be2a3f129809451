use crate::keyring::TokenStore;
use thiserror::Error;
use tracing::debug;

pub const API_TOKEN_ENTRY: &str = "api-token";
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum ApiKeyError {
    #[error("no API token found; pass --token, set ZEABUR_API_TOKEN or run 'zcli auth login'")]
    ApiKeyNotFound,
    #[error("API token must not be empty")]
    EmptyApiKey,
    #[error("Keyring error: {0}")]
    KeyringError(#[from] crate::keyring::KeyringError),
}

pub fn store_api_key(
    store: &dyn TokenStore,
    account: &str,
    api_key: &str,
) -> Result<(), ApiKeyError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(ApiKeyError::EmptyApiKey);
    }
    store.put(account, API_TOKEN_ENTRY, api_key)?;
    Ok(())
}

pub fn get_api_key(store: &dyn TokenStore, account: &str) -> Result<String, ApiKeyError> {
    match store.get(account, API_TOKEN_ENTRY)? {
        Some(api_key) if !api_key.trim().is_empty() => Ok(api_key),
        _ => Err(ApiKeyError::ApiKeyNotFound),
    }
}

pub fn delete_api_key(store: &dyn TokenStore, account: &str) -> Result<(), ApiKeyError> {
    store.delete(account, API_TOKEN_ENTRY)?;
    Ok(())
}

/// Pick the token for a request.
///
/// The token from the command line (or its environment variable) comes first.
/// Otherwise the token stored for `account` is used, and when that account has
/// none, the one stored for the default account.
pub fn resolve_api_key(
    store: &dyn TokenStore,
    explicit: Option<&str>,
    account: Option<&str>,
) -> Result<String, ApiKeyError> {
    if let Some(token) = explicit.map(str::trim).filter(|token| !token.is_empty()) {
        return Ok(token.to_string());
    }

    if let Some(account) = account.filter(|account| *account != DEFAULT_PROFILE) {
        match get_api_key(store, account) {
            Ok(token) => {
                debug!("Using the token stored for account '{}'", account);
                return Ok(token);
            }
            Err(ApiKeyError::ApiKeyNotFound) => {
                debug!("No token stored for account '{}', trying '{}'", account, DEFAULT_PROFILE)
            }
            Err(e) => return Err(e),
        }
    }
    get_api_key(store, DEFAULT_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev_keyring::DevKeyring;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_token_wins() {
        let dir = tempdir().unwrap();
        let store = DevKeyring::with_path(dir.path().join("creds.json"));
        store_api_key(&store, "work", "stored").unwrap();

        assert_eq!(
            resolve_api_key(&store, Some("  tok  "), Some("work")).unwrap(),
            "tok"
        );
    }

    #[test]
    fn test_account_token_then_default() {
        let dir = tempdir().unwrap();
        let store = DevKeyring::with_path(dir.path().join("creds.json"));
        store_api_key(&store, DEFAULT_PROFILE, "tok-default").unwrap();
        store_api_key(&store, "work", "tok-work").unwrap();

        assert_eq!(resolve_api_key(&store, None, Some("work")).unwrap(), "tok-work");
        assert_eq!(resolve_api_key(&store, Some(" "), None).unwrap(), "tok-default");
        assert_eq!(resolve_api_key(&store, None, Some("home")).unwrap(), "tok-default");
    }

    #[test]
    fn test_nothing_stored() {
        let dir = tempdir().unwrap();
        let store = DevKeyring::with_path(dir.path().join("creds.json"));

        assert!(matches!(
            resolve_api_key(&store, None, Some("work")),
            Err(ApiKeyError::ApiKeyNotFound)
        ));
    }

    #[test]
    fn test_store_rejects_blank_token() {
        let dir = tempdir().unwrap();
        let store = DevKeyring::with_path(dir.path().join("creds.json"));

        assert!(matches!(
            store_api_key(&store, DEFAULT_PROFILE, "   "),
            Err(ApiKeyError::EmptyApiKey)
        ));
    }

    #[test]
    fn test_delete_only_touches_one_account() {
        let dir = tempdir().unwrap();
        let store = DevKeyring::with_path(dir.path().join("creds.json"));
        store_api_key(&store, DEFAULT_PROFILE, "tok-default").unwrap();
        store_api_key(&store, "work", "tok-work").unwrap();

        delete_api_key(&store, "work").unwrap();

        assert!(matches!(
            get_api_key(&store, "work"),
            Err(ApiKeyError::ApiKeyNotFound)
        ));
        assert_eq!(get_api_key(&store, DEFAULT_PROFILE).unwrap(), "tok-default");
    }
}

//! Execution context shared by all CLI commands.
//!
//! Holds the loaded configuration together with the path it is saved to and the
//! token store, and builds the API client for commands that talk to Zeabur.

use crate::{
    actions::utils::optional_string,
    api_key::resolve_api_key,
    commands::params::{PARAMETER_ACCOUNT, PARAMETER_TOKEN},
    configuration::Configuration,
    error::CliError,
    http_utils::HttpRequestConfig,
    keyring::{Keyring, TokenStore},
    zeabur::ZeaburClient,
};
use clap::ArgMatches;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execution context containing common resources needed by CLI commands.
pub struct ExecutionContext {
    configuration: Configuration,
    configuration_path: PathBuf,
    token_store: Box<dyn TokenStore>,
}

impl ExecutionContext {
    pub fn new(configuration: Configuration, configuration_path: PathBuf) -> Self {
        Self {
            configuration,
            configuration_path,
            token_store: Box::new(Keyring::default()),
        }
    }

    /// Replace the system keyring as the source of stored tokens.
    pub fn with_token_store(mut self, token_store: Box<dyn TokenStore>) -> Self {
        self.token_store = token_store;
        self
    }

    /// Load the configuration from its default location.
    ///
    /// A missing file yields the built-in defaults.
    pub fn load() -> Result<Self, CliError> {
        let configuration_path = Configuration::get_default_configuration_file_path()?;
        let configuration = Configuration::load_or_default()?;
        Ok(Self::new(configuration, configuration_path))
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    pub fn configuration_path(&self) -> &Path {
        &self.configuration_path
    }

    pub fn save_configuration(&self) -> Result<(), CliError> {
        debug!("Saving configuration to {}", self.configuration_path.display());
        self.configuration.save(&self.configuration_path)?;
        Ok(())
    }

    pub fn token_store(&self) -> &dyn TokenStore {
        &*self.token_store
    }

    /// Create an API client using the token from `--token`, `ZEABUR_API_TOKEN` or the keyring.
    pub fn client(&self, sub_matches: &ArgMatches) -> Result<ZeaburClient, CliError> {
        self.client_for_account(sub_matches, None)
    }

    /// Like [`Self::client`], for a service whose alias names a keyring account.
    ///
    /// An `--account` given on the command line takes precedence over `account`.
    pub fn client_for_account(
        &self,
        sub_matches: &ArgMatches,
        account: Option<&str>,
    ) -> Result<ZeaburClient, CliError> {
        let token = optional_string(sub_matches, PARAMETER_TOKEN);
        let account = optional_string(sub_matches, PARAMETER_ACCOUNT).or(account);
        let token = resolve_api_key(self.token_store(), token, account)?;

        let config = HttpRequestConfig::from_configuration(&self.configuration);
        debug!("Using API endpoint {}", config.endpoint);
        Ok(ZeaburClient::with_config(token, config)?)
    }
}

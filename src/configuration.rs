use crate::format::{Formattable, FormattingError, OutputFormat, Table};
use crate::http_utils::{DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "zcli";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIG_DIR_ENV: &str = "ZCLI_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause}")]
    FailedToLoadData { cause: Box<dyn std::error::Error + Send + Sync> },
    #[error("failed to write configuration data to file, because of: {cause}")]
    FailedToWriteData { cause: Box<dyn std::error::Error + Send + Sync> },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
}

/// A short name for a service and the ids it stands for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAlias {
    pub service_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Keyring account holding the token for this service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl ServiceAlias {
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            environment_id: None,
            project_id: None,
            name: None,
            account: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_endpoint: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    services: BTreeMap<String, ServiceAlias>,
}

impl Configuration {
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut default_config_file_path) => {
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load the default configuration file, or the built-in defaults when there is none yet.
    ///
    /// Nothing is written; the file appears on the first `save`.
    pub fn load_or_default() -> Result<Configuration, ConfigurationError> {
        let path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", path.display());

        if !path.exists() {
            debug!("Configuration file not found, using defaults");
            return Ok(Configuration::default());
        }

        Configuration::load_from_file(&path)
    }

    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let configuration = fs::read_to_string(path).map_err(|cause| {
            ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            }
        })?;

        serde_yaml::from_str(&configuration).map_err(|cause| ConfigurationError::FailedToLoadData {
            cause: Box::new(cause),
        })
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        // create the parent directory on first save
        match path.parent() {
            Some(directory) => fs::create_dir_all(directory)
                .map_err(|_| ConfigurationError::FailedToFindConfigurationDirectory)?,
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })?;
        self.write(Box::new(file))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigurationError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    /// GraphQL endpoint, the public Zeabur API unless overridden
    pub fn api_endpoint(&self) -> String {
        self.api_endpoint
            .as_ref()
            .map(Url::to_string)
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string())
    }

    pub fn set_api_endpoint(&mut self, endpoint: Option<Url>) {
        self.api_endpoint = endpoint;
    }

    pub fn with_api_endpoint(mut self, endpoint: Url) -> Self {
        self.api_endpoint = Some(endpoint);
        self
    }

    /// Request timeout in seconds
    pub fn timeout(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn set_timeout(&mut self, timeout_secs: Option<u64>) {
        self.timeout_secs = timeout_secs;
    }

    pub fn service_alias(&self, alias: &str) -> Option<&ServiceAlias> {
        self.services.get(alias)
    }

    pub fn service_aliases(&self) -> &BTreeMap<String, ServiceAlias> {
        &self.services
    }

    /// Add or replace an alias; an empty alias or service id is refused
    pub fn add_service_alias(
        &mut self,
        alias: &str,
        service: ServiceAlias,
    ) -> Result<(), ConfigurationError> {
        if alias.trim().is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "alias".to_string(),
            });
        }
        if service.service_id.trim().is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "service_id".to_string(),
            });
        }

        self.services.insert(alias.to_string(), service);
        Ok(())
    }

    pub fn remove_service_alias(&mut self, alias: &str) -> Option<ServiceAlias> {
        self.services.remove(alias)
    }

    pub fn service_alias_table(&self) -> Table {
        let mut table = Table::new(
            "Service Aliases",
            ["Alias", "Name", "Service", "Environment", "Project", "Account"],
        );
        for (alias, service) in &self.services {
            table.row(vec![
                alias.clone(),
                service.name.clone().unwrap_or_else(|| "-".to_string()),
                service.service_id.clone(),
                service.environment_id.clone().unwrap_or_else(|| "-".to_string()),
                service.project_id.clone().unwrap_or_else(|| "-".to_string()),
                service.account.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table
    }
}

impl Formattable for Configuration {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            OutputFormat::Table(_) => {
                let mut settings = Table::new("Configuration", ["Setting", "Value"]);
                settings.row(vec!["api_endpoint".to_string(), self.api_endpoint()]);
                settings.row(vec!["timeout_secs".to_string(), self.timeout().to_string()]);
                let mut output = settings.format(f)?;
                if !self.services.is_empty() {
                    output.push_str("\n\n");
                    output.push_str(&self.service_alias_table().format(f)?);
                }
                Ok(output)
            }
            OutputFormat::Csv(_) => self.service_alias_table().format(f),
        }
    }
}

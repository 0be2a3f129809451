use crate::{
    commands::params::{PARAMETER_ENVIRONMENT, PARAMETER_PROJECT, PARAMETER_SERVICE},
    configuration::Configuration,
    error::CliError,
    format::{format_json, OutputFormatOptions},
    output::Output,
    zeabur::ResponseData,
};
use clap::ArgMatches;
use serde_json::Value;
use tracing::debug;

/// A service together with the IDs needed to address it.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTarget {
    pub service_id: String,
    pub environment_id: Option<String>,
    pub project_id: Option<String>,
    /// Keyring account named by the alias
    pub account: Option<String>,
}

impl ServiceTarget {
    /// Resolve a service argument that is either a configured alias or a raw service ID.
    ///
    /// Explicit environment and project IDs override the ones stored with the alias.
    ///
    /// # Arguments
    ///
    /// * `service` - Alias or service ID as given on the command line
    /// * `environment` - Optional `--environment` value
    /// * `project` - Optional `--project` value
    /// * `configuration` - Configuration holding the aliases
    pub fn resolve(
        service: &str,
        environment: Option<&str>,
        project: Option<&str>,
        configuration: &Configuration,
    ) -> ServiceTarget {
        let (service_id, environment_id, project_id, account) =
            match configuration.service_alias(service) {
                Some(alias) => {
                    debug!("Resolved service alias '{}' to {}", service, alias.service_id);
                    (
                        alias.service_id.clone(),
                        alias.environment_id.clone(),
                        alias.project_id.clone(),
                        alias.account.clone(),
                    )
                }
                None => (service.to_string(), None, None, None),
            };

        ServiceTarget {
            service_id,
            environment_id: environment.map(str::to_string).or(environment_id),
            project_id: project.map(str::to_string).or(project_id),
            account,
        }
    }

    /// Resolve from the `SERVICE`, `--environment` and (when defined) `--project` arguments.
    pub fn from_args(
        sub_matches: &ArgMatches,
        configuration: &Configuration,
    ) -> Result<ServiceTarget, CliError> {
        let service = sub_matches
            .get_one::<String>(PARAMETER_SERVICE)
            .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_SERVICE.to_string()))?;
        Ok(Self::resolve(
            service,
            optional_string(sub_matches, PARAMETER_ENVIRONMENT),
            optional_string(sub_matches, PARAMETER_PROJECT),
            configuration,
        ))
    }

    pub fn environment_id(&self) -> Result<&str, CliError> {
        self.environment_id.as_deref().ok_or_else(|| {
            CliError::MissingRequiredArgument(format!(
                "--environment is required for service {} (or set one with 'zcli config service add')",
                self.service_id
            ))
        })
    }

    pub fn project_id(&self) -> Result<&str, CliError> {
        self.project_id.as_deref().ok_or_else(|| {
            CliError::MissingRequiredArgument(format!(
                "--project is required for service {} (or set one with 'zcli config service add')",
                self.service_id
            ))
        })
    }
}

/// Value of an optional string argument; `None` also when the command does not define it.
pub fn optional_string<'a>(sub_matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    sub_matches
        .try_get_one::<String>(name)
        .ok()
        .flatten()
        .map(String::as_str)
}

/// Value of a mandatory string argument
pub fn required_string<'a>(sub_matches: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    optional_string(sub_matches, name)
        .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
}

/// Field of a JSON object rendered for display; missing and null fields are empty.
pub fn text(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn text_or(value: &Value, key: &str, fallback: &str) -> String {
    let text = text(value, key);
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Like [`text_or`], but a missing field reads `absent` and a null or empty one `blank`.
pub fn field_or(value: &Value, key: &str, absent: &str, blank: &str) -> String {
    match value.get(key) {
        None => absent.to_string(),
        Some(_) => text_or(value, key, blank),
    }
}

/// Elements of a JSON array, none when the value is missing or not an array
pub fn records(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

/// Print the data returned by the client exactly as received.
pub fn print_data(
    output: &mut Output,
    data: &ResponseData,
    options: &OutputFormatOptions,
) -> Result<(), CliError> {
    let json = format_json(&Value::Object(data.clone()), options)?;
    output.print(&json)?;
    Ok(())
}

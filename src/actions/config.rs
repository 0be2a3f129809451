//! Configuration actions.
//!
//! Changes are written back to the configuration file right away.

use crate::{
    actions::utils::{optional_string, required_string},
    commands::params::{
        PARAMETER_ACCOUNT, PARAMETER_ALIAS, PARAMETER_ALIAS_PROJECT_ID, PARAMETER_API_ENDPOINT,
        PARAMETER_ENVIRONMENT_ID, PARAMETER_NAME, PARAMETER_SERVICE_ID, PARAMETER_TIMEOUT,
    },
    configuration::ServiceAlias,
    context::ExecutionContext,
    error::CliError,
    format::{format_json, Formattable, FormattingError, OutputFormat},
    format_utils::FormatParams,
    output::Output,
};
use clap::ArgMatches;
use tracing::debug;
use url::Url;

pub fn show_path(context: &ExecutionContext, output: &mut Output) -> Result<(), CliError> {
    output.print(&context.configuration_path().display().to_string())?;
    Ok(())
}

pub fn show_configuration(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    output.print(&context.configuration().format(&format)?)?;
    Ok(())
}

pub fn set_settings(
    sub_matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let endpoint = sub_matches.get_one::<Url>(PARAMETER_API_ENDPOINT).cloned();
    let timeout = sub_matches.get_one::<u64>(PARAMETER_TIMEOUT).copied();

    if endpoint.is_none() && timeout.is_none() {
        return Err(CliError::MissingRequiredArgument(format!(
            "--{} or --{}",
            PARAMETER_API_ENDPOINT, PARAMETER_TIMEOUT
        )));
    }

    let configuration = context.configuration_mut();
    if let Some(endpoint) = endpoint {
        configuration.set_api_endpoint(Some(endpoint));
    }
    if let Some(timeout) = timeout {
        configuration.set_timeout(Some(timeout));
    }
    context.save_configuration()?;

    output.success("Configuration updated")?;
    Ok(())
}

pub fn add_service_alias(
    sub_matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let alias = required_string(sub_matches, PARAMETER_ALIAS)?;
    let service = ServiceAlias {
        service_id: required_string(sub_matches, PARAMETER_SERVICE_ID)?.to_string(),
        environment_id: optional_string(sub_matches, PARAMETER_ENVIRONMENT_ID).map(str::to_string),
        project_id: optional_string(sub_matches, PARAMETER_ALIAS_PROJECT_ID).map(str::to_string),
        name: optional_string(sub_matches, PARAMETER_NAME).map(str::to_string),
        account: optional_string(sub_matches, PARAMETER_ACCOUNT).map(str::to_string),
    };

    debug!("Adding service alias '{}' for {}", alias, service.service_id);
    let service_id = service.service_id.clone();
    context.configuration_mut().add_service_alias(alias, service)?;
    context.save_configuration()?;

    output.success(&format!("Service alias '{}' saved ({})", alias, service_id))?;
    Ok(())
}

pub fn remove_service_alias(
    sub_matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let alias = required_string(sub_matches, PARAMETER_ALIAS)?;
    if context.configuration_mut().remove_service_alias(alias).is_none() {
        return Err(CliError::UnknownServiceAlias(alias.to_string()));
    }
    context.save_configuration()?;

    output.success(&format!("Service alias '{}' removed", alias))?;
    Ok(())
}

pub fn list_service_aliases(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let configuration = context.configuration();

    if let OutputFormat::Json(options) = &format {
        let aliases =
            serde_json::to_value(configuration.service_aliases()).map_err(FormattingError::from)?;
        output.print(&format_json(&aliases, options)?)?;
        return Ok(());
    }

    if configuration.service_aliases().is_empty() {
        output.warning("No service aliases configured")?;
        return Ok(());
    }
    output.print(&configuration.service_alias_table().format(&format)?)?;
    Ok(())
}

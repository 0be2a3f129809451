//! Authentication actions.
//!
//! The token lives in the system keyring (or the development store when built
//! with the `dev-keyring` feature); see [`crate::api_key`]. Each account has
//! its own token, `--account` picks one and `default` is used otherwise.

use crate::{
    actions::utils::{optional_string, text, text_or},
    api_key::{delete_api_key, store_api_key, DEFAULT_PROFILE},
    commands::params::{ENV_API_TOKEN, PARAMETER_ACCOUNT, PARAMETER_TOKEN},
    context::ExecutionContext,
    error::CliError,
    output::Output,
};
use clap::ArgMatches;
use serde_json::Value;
use tracing::info;

fn account_name(sub_matches: &ArgMatches) -> &str {
    optional_string(sub_matches, PARAMETER_ACCOUNT).unwrap_or(DEFAULT_PROFILE)
}

pub fn login(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let token = optional_string(sub_matches, PARAMETER_TOKEN).ok_or_else(|| {
        CliError::MissingRequiredArgument(format!("--token <TOKEN> (or {})", ENV_API_TOKEN))
    })?;
    let account = account_name(sub_matches);

    store_api_key(context.token_store(), account, token)?;
    info!("API token stored for account '{}'", account);
    output.success(&format!("API token stored for account '{}'", account))?;
    Ok(())
}

pub fn logout(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let account = account_name(sub_matches);
    delete_api_key(context.token_store(), account)?;
    info!("API token deleted for account '{}'", account);
    output.success(&format!("API token removed for account '{}'", account))?;
    Ok(())
}

/// Check the token against the API and report whom it belongs to.
pub async fn status(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let data = context.client(sub_matches)?.get_current_user().await?;
    let user = data.get("me").unwrap_or(&Value::Null);

    let email = text(user, "email");
    let account = if email.is_empty() {
        text_or(user, "username", "unknown user")
    } else {
        format!("{} ({})", text_or(user, "username", "unknown user"), email)
    };
    output.success(&format!("Authenticated as {}", account))?;
    Ok(())
}

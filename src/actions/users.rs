//! User action implementations.

use crate::{
    actions::utils::{print_data, text_or},
    context::ExecutionContext,
    error::CliError,
    format::{Formattable, OutputFormat, Panel},
    format_utils::FormatParams,
    output::Output,
};
use clap::ArgMatches;
use serde_json::Value;

/// Show the account the token belongs to.
pub async fn get_current_user(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let data = context.client(sub_matches)?.get_current_user().await?;

    if let OutputFormat::Json(options) = &format {
        return print_data(output, &data, options);
    }

    let user = data.get("me").unwrap_or(&Value::Null);
    output.print(&user_panel(user).format(&format)?)?;
    Ok(())
}

pub(crate) fn user_panel(user: &Value) -> Panel {
    Panel::new("Current User")
        .line("Username", text_or(user, "username", "N/A"))
        .line("Email", text_or(user, "email", "N/A"))
        .line("Name", text_or(user, "name", "N/A"))
        .line("ID", text_or(user, "_id", "N/A"))
}

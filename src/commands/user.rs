//! User command definitions.

use clap::{ArgMatches, Command};

use crate::{
    actions::users,
    commands::{
        params::{
            format_parameter, format_pretty_parameter, format_with_headers_parameter, COMMAND_GET,
            COMMAND_USER,
        },
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

/// Define the user command and its subcommands
pub fn user_command() -> Command {
    Command::new(COMMAND_USER)
        .about("Account information")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show the user the API token belongs to")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}

/// Execute user-related subcommands based on the provided arguments
pub async fn execute_user_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => users::get_current_user(sub_matches, context, output).await,
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

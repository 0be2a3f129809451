//! Authentication command definitions.
//!
//! `login` stores the token given with the global `--token` option (or
//! `ZEABUR_API_TOKEN`) in the system keyring, under the account named with the
//! global `--account` option.

use clap::{ArgMatches, Command};

use crate::{
    actions::auth,
    commands::{
        params::{COMMAND_AUTH, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_STATUS},
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

pub fn auth_command() -> Command {
    Command::new(COMMAND_AUTH)
        .about("Manage the stored API token")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LOGIN)
                .about("Store an API token: zcli auth login --token <TOKEN> [--account <NAME>]"),
        )
        .subcommand(Command::new(COMMAND_LOGOUT).about("Delete the API token stored for an account"))
        .subcommand(
            Command::new(COMMAND_STATUS).about("Check which account the API token belongs to"),
        )
}

pub async fn execute_auth_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LOGIN, sub_matches)) => auth::login(sub_matches, context, output),
        Some((COMMAND_LOGOUT, sub_matches)) => auth::logout(sub_matches, context, output),
        Some((COMMAND_STATUS, sub_matches)) => auth::status(sub_matches, context, output).await,
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

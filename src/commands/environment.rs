//! Environment command definitions.

use clap::{ArgMatches, Command};

use crate::{
    actions::environments,
    commands::{
        params::{
            format_parameter, format_pretty_parameter, format_with_headers_parameter,
            project_parameter, COMMAND_ENVIRONMENT, COMMAND_LIST,
        },
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

pub fn environment_command() -> Command {
    Command::new(COMMAND_ENVIRONMENT)
        .about("Environment operations")
        .visible_alias("env")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the environments of a project")
                .visible_alias("ls")
                .arg(project_parameter(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}

pub async fn execute_environment_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            environments::list_environments(sub_matches, context, output).await
        }
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

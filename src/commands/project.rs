//! Project command definitions.

use clap::{ArgMatches, Command};

use crate::{
    actions::projects,
    commands::{
        params::{
            format_parameter, format_pretty_parameter, format_with_headers_parameter,
            project_id_argument, COMMAND_GET, COMMAND_LIST, COMMAND_PROJECT,
        },
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

/// Create the project command with all its subcommands.
pub fn project_command() -> Command {
    Command::new(COMMAND_PROJECT)
        .about("Project operations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List all projects")
                .visible_alias("ls")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show a project with its services and environments")
                .arg(project_id_argument())
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}

pub async fn execute_project_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => projects::list_projects(sub_matches, context, output).await,
        Some((COMMAND_GET, sub_matches)) => projects::get_project(sub_matches, context, output).await,
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

//! Log command definitions.

use clap::{ArgMatches, Command};

use crate::{
    actions::logs,
    commands::{
        params::{
            deployment_parameter, environment_parameter, format_parameter,
            format_pretty_parameter, format_with_headers_parameter, limit_parameter,
            project_parameter, service_argument, COMMAND_BUILD, COMMAND_LOGS, COMMAND_RUNTIME,
        },
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

pub fn logs_command() -> Command {
    Command::new(COMMAND_LOGS)
        .about("Runtime and build logs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_RUNTIME)
                .about("Show runtime logs of a service")
                .arg(service_argument())
                .arg(project_parameter(false))
                .arg(environment_parameter())
                .arg(limit_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_BUILD)
                .about("Show build logs of a deployment")
                .arg(project_parameter(true))
                .arg(deployment_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}

pub async fn execute_logs_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_RUNTIME, sub_matches)) => logs::runtime_logs(sub_matches, context, output).await,
        Some((COMMAND_BUILD, sub_matches)) => logs::build_logs(sub_matches, context, output).await,
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

//! Service command definitions.
//!
//! Every service subcommand takes the service as a positional argument, either
//! a raw service ID or an alias defined with `zcli config service add`.
//! `status --all` reports on every alias instead.

use clap::{ArgMatches, Command};

use crate::{
    actions::services::{self, Lifecycle},
    commands::{
        params::{
            all_parameter, command_argument, environment_parameter, format_parameter,
            format_pretty_parameter, format_with_headers_parameter, project_parameter,
            service_argument, wait_parameter,
            COMMAND_EXEC, COMMAND_KEEPALIVE, COMMAND_LIST, COMMAND_REDEPLOY, COMMAND_RESTART,
            COMMAND_SERVICE, COMMAND_START, COMMAND_STATUS, COMMAND_STOP, PARAMETER_ALL,
            PARAMETER_SERVICE,
        },
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

fn lifecycle_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(service_argument())
        .arg(environment_parameter())
}

/// Create the service command with all its subcommands.
pub fn service_command() -> Command {
    Command::new(COMMAND_SERVICE)
        .about("Service operations")
        .visible_alias("svc")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the services of a project")
                .visible_alias("ls")
                .arg(project_parameter(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(lifecycle_command(COMMAND_RESTART, "Restart a service"))
        .subcommand(lifecycle_command(COMMAND_STOP, "Stop (suspend) a service"))
        .subcommand(lifecycle_command(COMMAND_START, "Start (resume) a suspended service"))
        .subcommand(lifecycle_command(COMMAND_REDEPLOY, "Redeploy a service"))
        .subcommand(
            lifecycle_command(COMMAND_STATUS, "Show the status of a service")
                .mut_arg(PARAMETER_SERVICE, |arg| {
                    arg.required(false).required_unless_present(PARAMETER_ALL)
                })
                .arg(all_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            lifecycle_command(COMMAND_EXEC, "Execute a command inside a service")
                .arg(command_argument()),
        )
        .subcommand(
            lifecycle_command(
                COMMAND_KEEPALIVE,
                "Restart a service, wait, then suspend it again",
            )
            .arg(wait_parameter()),
        )
}

pub async fn execute_service_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => services::list_services(sub_matches, context, output).await,
        Some((COMMAND_RESTART, sub_matches)) => {
            services::change_lifecycle(Lifecycle::Restart, sub_matches, context, output).await
        }
        Some((COMMAND_STOP, sub_matches)) => {
            services::change_lifecycle(Lifecycle::Stop, sub_matches, context, output).await
        }
        Some((COMMAND_START, sub_matches)) => {
            services::change_lifecycle(Lifecycle::Start, sub_matches, context, output).await
        }
        Some((COMMAND_REDEPLOY, sub_matches)) => {
            services::change_lifecycle(Lifecycle::Redeploy, sub_matches, context, output).await
        }
        Some((COMMAND_STATUS, sub_matches)) => {
            services::service_status(sub_matches, context, output).await
        }
        Some((COMMAND_EXEC, sub_matches)) => services::execute(sub_matches, context, output).await,
        Some((COMMAND_KEEPALIVE, sub_matches)) => {
            services::keepalive(sub_matches, context, output).await
        }
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

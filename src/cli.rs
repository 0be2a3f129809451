use crate::{
    commands::{
        auth::execute_auth_command, config::execute_config_command,
        environment::execute_environment_command, logs::execute_logs_command,
        project::execute_project_command, service::execute_service_command,
        subcommand_name, user::execute_user_command, COMMAND_AUTH, COMMAND_CONFIG,
        COMMAND_ENVIRONMENT, COMMAND_LOGS, COMMAND_PROJECT, COMMAND_SERVICE, COMMAND_USER,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};
use clap::ArgMatches;
use tracing::debug;

/// Dispatch parsed arguments to the selected command group.
pub async fn execute_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    debug!("Executing command: {}", subcommand_name(matches));

    match matches.subcommand() {
        Some((COMMAND_USER, sub_matches)) => execute_user_command(sub_matches, context, output).await,
        Some((COMMAND_PROJECT, sub_matches)) => {
            execute_project_command(sub_matches, context, output).await
        }
        Some((COMMAND_SERVICE, sub_matches)) => {
            execute_service_command(sub_matches, context, output).await
        }
        Some((COMMAND_ENVIRONMENT, sub_matches)) => {
            execute_environment_command(sub_matches, context, output).await
        }
        Some((COMMAND_LOGS, sub_matches)) => execute_logs_command(sub_matches, context, output).await,
        Some((COMMAND_AUTH, sub_matches)) => execute_auth_command(sub_matches, context, output).await,
        Some((COMMAND_CONFIG, sub_matches)) => {
            execute_config_command(sub_matches, context, output).await
        }
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

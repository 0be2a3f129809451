//! Configuration command definitions.
//!
//! This module defines CLI commands related to configuration management.

use clap::{ArgMatches, Command};

use crate::{
    actions::config,
    commands::{
        params::{
            alias_argument, alias_project_id_parameter, api_endpoint_parameter,
            environment_id_parameter, format_parameter, format_pretty_parameter,
            format_with_headers_parameter, name_parameter, service_id_parameter,
            timeout_parameter, COMMAND_ADD, COMMAND_CONFIG, COMMAND_GET, COMMAND_LIST,
            COMMAND_PATH, COMMAND_REMOVE, COMMAND_SERVICE, COMMAND_SET,
        },
        subcommand_name,
    },
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Configuration management")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get configuration details")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter())
                .subcommand(Command::new(COMMAND_PATH).about("Show configuration file path")),
        )
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Change API settings")
                .arg(api_endpoint_parameter())
                .arg(timeout_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SERVICE)
                .about("Manage service aliases")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new(COMMAND_ADD)
                        .about("Add or replace a service alias; --account names the account holding its token")
                        .arg(alias_argument())
                        .arg(service_id_parameter())
                        .arg(environment_id_parameter())
                        .arg(alias_project_id_parameter())
                        .arg(name_parameter()),
                )
                .subcommand(
                    Command::new(COMMAND_REMOVE)
                        .about("Remove a service alias")
                        .visible_alias("rm")
                        .arg(alias_argument()),
                )
                .subcommand(
                    Command::new(COMMAND_LIST)
                        .about("List service aliases")
                        .visible_alias("ls")
                        .arg(format_parameter())
                        .arg(format_pretty_parameter())
                        .arg(format_with_headers_parameter()),
                ),
        )
}

pub async fn execute_config_command(
    matches: &ArgMatches,
    context: &mut ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_PATH, _)) => config::show_path(context, output),
            None => config::show_configuration(sub_matches, context, output),
            Some(_) => Err(CliError::UnsupportedSubcommand(subcommand_name(sub_matches))),
        },
        Some((COMMAND_SET, sub_matches)) => config::set_settings(sub_matches, context, output),
        Some((COMMAND_SERVICE, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ADD, alias_matches)) => {
                config::add_service_alias(alias_matches, context, output)
            }
            Some((COMMAND_REMOVE, alias_matches)) => {
                config::remove_service_alias(alias_matches, context, output)
            }
            Some((COMMAND_LIST, alias_matches)) => {
                config::list_service_aliases(alias_matches, context, output)
            }
            _ => Err(CliError::UnsupportedSubcommand(subcommand_name(sub_matches))),
        },
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}

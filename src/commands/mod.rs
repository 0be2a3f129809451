//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Each command group lives in its own file together with the function that
//! dispatches its leaves to the matching `actions` module.

use clap::{ArgMatches, Command};

pub mod auth;
pub mod config;
pub mod environment;
pub mod logs;
pub mod params;
pub mod project;
pub mod service;
pub mod user;

pub use params::{
    COMMAND_AUTH, COMMAND_CONFIG, COMMAND_ENVIRONMENT, COMMAND_LOGS, COMMAND_PROJECT,
    COMMAND_SERVICE, COMMAND_USER, PARAMETER_TOKEN, PARAMETER_VERBOSE,
};

/// Build the complete `zcli` command tree.
pub fn cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::verbose_parameter())
        .arg(params::token_parameter())
        .arg(params::account_parameter())
        .subcommand(user::user_command())
        .subcommand(project::project_command())
        .subcommand(service::service_command())
        .subcommand(environment::environment_command())
        .subcommand(logs::logs_command())
        .subcommand(auth::auth_command())
        .subcommand(config::config_command())
}

/// Parse the process arguments.
///
/// Exits the process with a usage message when the arguments are invalid.
pub fn create_cli_commands() -> ArgMatches {
    cli_command().get_matches()
}

/// Name of the selected subcommand, for error reporting
pub(crate) fn subcommand_name(matches: &ArgMatches) -> String {
    matches
        .subcommand()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_tree_is_consistent() {
        cli_command().debug_assert();
    }

    #[test]
    fn test_global_token_reaches_leaf_commands() {
        let matches = cli_command()
            .try_get_matches_from(["zcli", "--token", "tok", "service", "restart", "svc"])
            .unwrap();
        let (_, service) = matches.subcommand().unwrap();
        let (_, restart) = service.subcommand().unwrap();
        assert_eq!(
            restart.get_one::<String>(PARAMETER_TOKEN).map(String::as_str),
            Some("tok")
        );
    }

    #[test]
    fn test_account_is_accepted_after_the_subcommand() {
        let matches = cli_command()
            .try_get_matches_from(["zcli", "auth", "login", "--account", "work"])
            .unwrap();
        let (_, auth) = matches.subcommand().unwrap();
        let (_, login) = auth.subcommand().unwrap();
        assert_eq!(
            login.get_one::<String>(params::PARAMETER_ACCOUNT).map(String::as_str),
            Some("work")
        );
    }

    #[test]
    fn test_missing_group_is_rejected() {
        assert!(cli_command().try_get_matches_from(["zcli"]).is_err());
    }
}

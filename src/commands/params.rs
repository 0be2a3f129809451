//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};

// Command groups
pub const COMMAND_USER: &str = "user";
pub const COMMAND_PROJECT: &str = "project";
pub const COMMAND_SERVICE: &str = "service";
pub const COMMAND_ENVIRONMENT: &str = "environment";
pub const COMMAND_LOGS: &str = "logs";
pub const COMMAND_AUTH: &str = "auth";
pub const COMMAND_CONFIG: &str = "config";

// Read operations
pub const COMMAND_GET: &str = "get";
pub const COMMAND_LIST: &str = "list";

// Service operations
pub const COMMAND_RESTART: &str = "restart";
pub const COMMAND_STOP: &str = "stop";
pub const COMMAND_START: &str = "start";
pub const COMMAND_REDEPLOY: &str = "redeploy";
pub const COMMAND_STATUS: &str = "status";
pub const COMMAND_EXEC: &str = "exec";
pub const COMMAND_KEEPALIVE: &str = "keepalive";

// Log commands
pub const COMMAND_RUNTIME: &str = "runtime";
pub const COMMAND_BUILD: &str = "build";

// Auth commands
pub const COMMAND_LOGIN: &str = "login";
pub const COMMAND_LOGOUT: &str = "logout";

// Config commands
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SET: &str = "set";
pub const COMMAND_ADD: &str = "add";
pub const COMMAND_REMOVE: &str = "remove";

// Parameter names
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_ACCOUNT: &str = "account";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_PROJECT_ID: &str = "project_id";
pub const PARAMETER_PROJECT: &str = "project";
pub const PARAMETER_SERVICE: &str = "service";
pub const PARAMETER_ENVIRONMENT: &str = "environment";
pub const PARAMETER_DEPLOYMENT: &str = "deployment";
pub const PARAMETER_LIMIT: &str = "limit";
pub const PARAMETER_COMMAND: &str = "command";
pub const PARAMETER_WAIT: &str = "wait";
pub const PARAMETER_ALL: &str = "all";
pub const PARAMETER_ALIAS: &str = "alias";
pub const PARAMETER_SERVICE_ID: &str = "service-id";
pub const PARAMETER_ENVIRONMENT_ID: &str = "environment-id";
pub const PARAMETER_ALIAS_PROJECT_ID: &str = "project-id";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_API_ENDPOINT: &str = "api-endpoint";
pub const PARAMETER_TIMEOUT: &str = "timeout";

pub const ENV_API_TOKEN: &str = "ZEABUR_API_TOKEN";
pub const ENV_FORMAT: &str = "ZCLI_FORMAT";
pub const ENV_HEADERS: &str = "ZCLI_HEADERS";

/// Seconds between restart and suspend in `service keepalive`
pub const DEFAULT_KEEPALIVE_WAIT_SECS: u64 = 30;

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

/// The API token, shared by every command that talks to the API.
pub fn token_parameter() -> Arg {
    Arg::new(PARAMETER_TOKEN)
        .long(PARAMETER_TOKEN)
        .num_args(1)
        .required(false)
        .global(true)
        .env(ENV_API_TOKEN)
        .hide_env_values(true)
        .help("Zeabur API token (defaults to the token stored by 'zcli auth login')")
}

/// Keyring account to take the stored token from.
pub fn account_parameter() -> Arg {
    Arg::new(PARAMETER_ACCOUNT)
        .long(PARAMETER_ACCOUNT)
        .value_name("NAME")
        .num_args(1)
        .required(false)
        .global(true)
        .help("Account whose stored token is used (defaults to the alias' account, then 'default')")
}

/// Create the format parameter.
///
/// This parameter is used across multiple commands for output formatting.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env(ENV_FORMAT)
        .default_value("table")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Pretty-print JSON output")
}

pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .env(ENV_HEADERS)
        .help("Include a header row in CSV output")
}

/// Positional project ID.
pub fn project_id_argument() -> Arg {
    Arg::new(PARAMETER_PROJECT_ID)
        .value_name("PROJECT_ID")
        .required(true)
        .num_args(1)
        .help("The ID of the project")
}

/// `--project` option; mandatory unless a service alias supplies it.
pub fn project_parameter(required: bool) -> Arg {
    Arg::new(PARAMETER_PROJECT)
        .short('p')
        .long(PARAMETER_PROJECT)
        .num_args(1)
        .required(required)
        .help("The ID of the project")
}

/// Positional service: a service ID or a configured alias.
pub fn service_argument() -> Arg {
    Arg::new(PARAMETER_SERVICE)
        .value_name("SERVICE")
        .required(true)
        .num_args(1)
        .help("Service ID or a service alias from the configuration")
}

pub fn environment_parameter() -> Arg {
    Arg::new(PARAMETER_ENVIRONMENT)
        .short('e')
        .long(PARAMETER_ENVIRONMENT)
        .num_args(1)
        .required(false)
        .help("The ID of the environment (defaults to the alias' environment)")
}

pub fn deployment_parameter() -> Arg {
    Arg::new(PARAMETER_DEPLOYMENT)
        .short('d')
        .long(PARAMETER_DEPLOYMENT)
        .num_args(1)
        .required(true)
        .help("The ID of the deployment")
}

pub fn limit_parameter() -> Arg {
    Arg::new(PARAMETER_LIMIT)
        .short('n')
        .long(PARAMETER_LIMIT)
        .num_args(1)
        .required(false)
        .help("Number of log lines to fetch [default: 100]")
        .value_parser(clap::value_parser!(i64).range(1..))
}

/// Everything after the options is the command to run, `--` is optional.
pub fn command_argument() -> Arg {
    Arg::new(PARAMETER_COMMAND)
        .value_name("COMMAND")
        .required(true)
        .num_args(1..)
        .allow_hyphen_values(true)
        .trailing_var_arg(true)
        .help("Command and arguments to execute inside the service")
}

pub fn wait_parameter() -> Arg {
    Arg::new(PARAMETER_WAIT)
        .long(PARAMETER_WAIT)
        .num_args(1)
        .required(false)
        .help(format!(
            "Seconds to keep the service running before suspending it again [default: {}]",
            DEFAULT_KEEPALIVE_WAIT_SECS
        ))
        .value_parser(clap::value_parser!(u64))
}

/// `--all` for `service status`: every configured alias instead of one service.
pub fn all_parameter() -> Arg {
    Arg::new(PARAMETER_ALL)
        .long(PARAMETER_ALL)
        .action(ArgAction::SetTrue)
        .conflicts_with_all([PARAMETER_SERVICE, PARAMETER_ENVIRONMENT])
        .help("Show the status of every configured service alias")
}

pub fn alias_argument() -> Arg {
    Arg::new(PARAMETER_ALIAS)
        .value_name("ALIAS")
        .required(true)
        .num_args(1)
        .help("Short name for the service")
}

pub fn service_id_parameter() -> Arg {
    Arg::new(PARAMETER_SERVICE_ID)
        .long(PARAMETER_SERVICE_ID)
        .num_args(1)
        .required(true)
        .help("The ID of the service")
}

pub fn environment_id_parameter() -> Arg {
    Arg::new(PARAMETER_ENVIRONMENT_ID)
        .long(PARAMETER_ENVIRONMENT_ID)
        .num_args(1)
        .required(false)
        .help("Default environment ID for the service")
}

pub fn alias_project_id_parameter() -> Arg {
    Arg::new(PARAMETER_ALIAS_PROJECT_ID)
        .long(PARAMETER_ALIAS_PROJECT_ID)
        .num_args(1)
        .required(false)
        .help("Project ID the service belongs to")
}

pub fn name_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(false)
        .help("Display name")
}

pub fn api_endpoint_parameter() -> Arg {
    Arg::new(PARAMETER_API_ENDPOINT)
        .long(PARAMETER_API_ENDPOINT)
        .num_args(1)
        .required(false)
        .help("GraphQL endpoint URL")
        .value_parser(clap::value_parser!(url::Url))
}

pub fn timeout_parameter() -> Arg {
    Arg::new(PARAMETER_TIMEOUT)
        .long(PARAMETER_TIMEOUT)
        .num_args(1)
        .required(false)
        .help("Request timeout in seconds")
        .value_parser(clap::value_parser!(u64).range(1..))
}

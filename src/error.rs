use thiserror::Error;

use crate::{
    api_key::ApiKeyError, configuration::ConfigurationError, exit_codes::ZcliExitCode,
    format::FormattingError, http_utils::TransportError, zeabur::ClientError,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] FormattingError),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Error when a service alias is not defined in the configuration
    #[error("Service alias '{0}' not found")]
    UnknownServiceAlias(String),
    /// Error related to the API token (missing, empty, keyring access)
    #[error("{0}")]
    ApiKeyError(#[from] ApiKeyError),
    /// Error returned by the API client
    #[error("{0}")]
    ClientError(#[from] ClientError),
    /// A service action that failed remotely, e.g. "restart service"
    #[error("Failed to {action}: {source}")]
    ActionFailed {
        action: String,
        #[source]
        source: ClientError,
    },
    #[error("Output error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    pub fn action_failed(action: impl Into<String>) -> impl FnOnce(ClientError) -> CliError {
        let action = action.into();
        move |source| CliError::ActionFailed { action, source }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ZcliExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => ZcliExitCode::UsageError,
            CliError::ConfigurationError(_) => ZcliExitCode::ConfigError,
            CliError::FormattingError(_) => ZcliExitCode::DataError,
            CliError::MissingRequiredArgument(_) => ZcliExitCode::UsageError,
            CliError::UnknownServiceAlias(_) => ZcliExitCode::UsageError,
            CliError::ApiKeyError(_) => ZcliExitCode::AuthError,
            CliError::ClientError(source) | CliError::ActionFailed { source, .. } => {
                client_exit_code(source)
            }
            CliError::IoError(_) => ZcliExitCode::OSError,
        }
    }
}

fn client_exit_code(error: &ClientError) -> ZcliExitCode {
    match error {
        ClientError::Transport(TransportError::Status { status, .. })
            if *status == reqwest::StatusCode::UNAUTHORIZED =>
        {
            ZcliExitCode::AuthError
        }
        ClientError::Transport(_) => ZcliExitCode::NetworkError,
        ClientError::Api(_) => ZcliExitCode::ApiError,
        ClientError::EmptyCommand => ZcliExitCode::UsageError,
    }
}

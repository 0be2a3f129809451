//! Custom exit codes for the zcli application
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Custom exit codes for zcli
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ZcliExitCode {
    /// Success (0) - Command completed successfully
    Success = exitcode::OK,

    /// Command line usage error (64) - User input error
    UsageError = exitcode::USAGE,

    /// Data format error (65) - Output could not be produced
    DataError = exitcode::DATAERR,

    /// System error (71) - Terminal output could not be written
    OSError = exitcode::OSERR,

    /// Configuration error (78) - Application configuration issue
    ConfigError = exitcode::CONFIG,

    /// Authentication error (100) - Missing or unreadable token
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl ZcliExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            ZcliExitCode::Success => "Success",
            ZcliExitCode::UsageError => "Command line usage error",
            ZcliExitCode::DataError => "Data format error",
            ZcliExitCode::OSError => "Operating system error",
            ZcliExitCode::ConfigError => "Configuration error",
            ZcliExitCode::AuthError => "Authentication error",
            ZcliExitCode::NetworkError => "Network communication error",
            ZcliExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<ZcliExitCode> for i32 {
    fn from(code: ZcliExitCode) -> Self {
        code.code()
    }
}

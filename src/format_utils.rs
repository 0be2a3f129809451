//! Format parameter handling for the Zeabur CLI client.

use crate::{
    commands::params::{PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_PRETTY},
    format::{FormattingError, OutputFormat, OutputFormatOptions, TABLE},
};
use clap::ArgMatches;

/// Container for parsed format parameters with consistent defaults.
#[derive(Debug, Clone)]
pub struct FormatParams {
    pub format: OutputFormat,
    pub format_options: OutputFormatOptions,
}

impl FormatParams {
    /// Parse `--format`, `--pretty` and `--headers` from command arguments.
    ///
    /// Commands that do not define an option get its default.
    pub fn from_args(sub_matches: &ArgMatches) -> Result<FormatParams, FormattingError> {
        let format_str = sub_matches
            .try_get_one::<String>(PARAMETER_FORMAT)
            .ok()
            .flatten()
            .map(String::as_str)
            .unwrap_or(TABLE);

        let format_options = OutputFormatOptions {
            with_headers: flag(sub_matches, PARAMETER_HEADERS),
            pretty: flag(sub_matches, PARAMETER_PRETTY),
        };

        let format = OutputFormat::from_string_with_options(format_str, format_options.clone())?;

        Ok(FormatParams {
            format,
            format_options,
        })
    }
}

fn flag(sub_matches: &ArgMatches, name: &str) -> bool {
    sub_matches
        .try_get_one::<bool>(name)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use zcli::{
    cli::execute_command,
    commands::{create_cli_commands, PARAMETER_VERBOSE},
    context::ExecutionContext,
    error::CliError,
    output::Output,
};

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // Initialize the logging subsystem, stdout is reserved for command output
    let filter = if matches.get_flag(PARAMETER_VERBOSE) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::stdio();
    let result = run(&matches, &mut output).await;
    let _ = output.flush();

    if let Err(e) = result {
        let exit_code = e.exit_code();
        debug!("Command failed ({}): {:?}", exit_code.message(), e);
        let _ = output.failure(&e.to_string());
        let _ = output.flush();
        process::exit(exit_code.code());
    }
}

async fn run(matches: &clap::ArgMatches, output: &mut Output) -> Result<(), CliError> {
    let mut context = ExecutionContext::load()?;
    execute_command(matches, &mut context, output).await
}

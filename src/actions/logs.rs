//! Log action implementations.
//!
//! In table format every entry is printed as `<timestamp> <message>`, in the
//! order the API returned them.

use crate::{
    actions::utils::{print_data, records, required_string, text, ServiceTarget},
    commands::params::{PARAMETER_DEPLOYMENT, PARAMETER_LIMIT, PARAMETER_PROJECT},
    context::ExecutionContext,
    error::CliError,
    format::{Formattable, OutputFormat, Table},
    format_utils::FormatParams,
    output::Output,
    zeabur::ResponseData,
};
use clap::ArgMatches;

pub async fn runtime_logs(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let target = ServiceTarget::from_args(sub_matches, context.configuration())?;
    let project_id = target.project_id()?;
    let environment_id = target.environment_id()?;
    let limit = sub_matches.get_one::<i64>(PARAMETER_LIMIT).copied();

    let data = context
        .client_for_account(sub_matches, target.account.as_deref())?
        .get_runtime_logs(project_id, &target.service_id, environment_id, limit)
        .await?;

    print_logs(output, &data, "runtimeLogs", &format)
}

pub async fn build_logs(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let project_id = required_string(sub_matches, PARAMETER_PROJECT)?;
    let deployment_id = required_string(sub_matches, PARAMETER_DEPLOYMENT)?;

    let data = context
        .client(sub_matches)?
        .get_build_logs(project_id, deployment_id)
        .await?;

    print_logs(output, &data, "buildLogs", &format)
}

fn print_logs(
    output: &mut Output,
    data: &ResponseData,
    field: &str,
    format: &OutputFormat,
) -> Result<(), CliError> {
    if let OutputFormat::Json(options) = format {
        return print_data(output, data, options);
    }

    let entries = records(data.get(field));
    if entries.is_empty() {
        output.warning("No logs found")?;
        return Ok(());
    }

    match format {
        OutputFormat::Csv(_) => {
            let mut table = Table::new("Logs", ["Timestamp", "Message"]);
            for entry in entries {
                table.row(vec![text(entry, "timestamp"), text(entry, "message")]);
            }
            output.print(&table.format(format)?)?;
        }
        _ => {
            for entry in entries {
                output.log_line(&text(entry, "timestamp"), &text(entry, "message"))?;
            }
        }
    }
    Ok(())
}

//! Project action implementations.

use crate::{
    actions::utils::{field_or, print_data, records, required_string, text, text_or},
    commands::params::PARAMETER_PROJECT_ID,
    context::ExecutionContext,
    error::CliError,
    format::{Formattable, OutputFormat, Panel, Table},
    format_utils::FormatParams,
    output::Output,
};
use clap::ArgMatches;
use serde_json::Value;

pub async fn list_projects(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let data = context.client(sub_matches)?.list_projects().await?;

    if let OutputFormat::Json(options) = &format {
        return print_data(output, &data, options);
    }

    let projects = records(data.get("projects"));
    if projects.is_empty() {
        output.warning("No projects found")?;
        return Ok(());
    }

    let mut table = Table::new("Projects", ["ID", "Name", "Description"]);
    for project in projects {
        table.row(vec![
            text(project, "_id"),
            text(project, "name"),
            text_or(project, "description", "-"),
        ]);
    }
    output.print(&table.format(&format)?)?;
    Ok(())
}

/// Show one project with its services and environments.
pub async fn get_project(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let project_id = required_string(sub_matches, PARAMETER_PROJECT_ID)?;
    let data = context.client(sub_matches)?.get_project(project_id).await?;

    if let OutputFormat::Json(options) = &format {
        return print_data(output, &data, options);
    }

    let project = data.get("project").unwrap_or(&Value::Null);
    let panel = Panel::new("Project Details")
        .line("ID", text_or(project, "_id", "N/A"))
        .line("Name", text_or(project, "name", "N/A"))
        .line("Description", field_or(project, "description", "N/A", "-"));

    let mut services = Table::new("Services", ["ID", "Name", "Template"]);
    for service in records(project.get("services")) {
        services.row(vec![
            text(service, "_id"),
            text(service, "name"),
            text_or(service, "template", "-"),
        ]);
    }

    let mut environments = Table::new("Environments", ["ID", "Name"]);
    for environment in records(project.get("environments")) {
        environments.row(vec![text(environment, "_id"), text(environment, "name")]);
    }

    let mut sections = vec![panel.format(&format)?];
    if !services.is_empty() {
        sections.push(services.format(&format)?);
    }
    if !environments.is_empty() {
        sections.push(environments.format(&format)?);
    }
    output.print(&sections.join("\n"))?;
    Ok(())
}

use crate::{
    actions::utils::{print_data, records, required_string, text},
    commands::params::PARAMETER_PROJECT,
    context::ExecutionContext,
    error::CliError,
    format::{Formattable, OutputFormat, Table},
    format_utils::FormatParams,
    output::Output,
};
use clap::ArgMatches;

pub async fn list_environments(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let project_id = required_string(sub_matches, PARAMETER_PROJECT)?;
    let data = context.client(sub_matches)?.get_environments(project_id).await?;

    if let OutputFormat::Json(options) = &format {
        return print_data(output, &data, options);
    }

    let environments = records(
        data.get("project")
            .and_then(|project| project.get("environments")),
    );
    if environments.is_empty() {
        output.warning("No environments found")?;
        return Ok(());
    }

    let mut table = Table::new("Environments", ["ID", "Name"]);
    for environment in environments {
        table.row(vec![text(environment, "_id"), text(environment, "name")]);
    }
    output.print(&table.format(&format)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::actions::testing::{context_for, run};
    use crate::queries;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_environment_list_csv() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::GET_ENVIRONMENTS,
                "variables": {"projectId": "p1"}
            }));
            then.status(200).json_body(json!({"data": {"project": {"environments": [
                {"_id": "e1", "name": "production"},
                {"_id": "e2", "name": "staging"}
            ]}}}));
        });

        let (mut context, _dir) = context_for(&server);
        let (result, out, _) = run(
            &mut context,
            &["environment", "list", "-p", "p1", "-f", "csv", "--headers"],
        )
        .await;

        result.unwrap();
        mock.assert_async().await;
        assert_eq!(out, "ID,NAME\ne1,production\ne2,staging\n");
    }

    #[tokio::test]
    async fn test_environment_list_pretty_json() {
        let server = MockServer::start_async().await;
        let data = json!({"project": {"environments": [{"_id": "e1", "name": "production"}]}});
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({"data": data}));
        });

        let (mut context, _dir) = context_for(&server);
        let (result, out, _) =
            run(&mut context, &["env", "ls", "-p", "p1", "-f", "json", "--pretty"]).await;

        result.unwrap();
        assert_eq!(out.trim_end(), serde_json::to_string_pretty(&data).unwrap());
    }
}

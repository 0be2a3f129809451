//! Service action implementations.
//!
//! Lifecycle changes report `✓ Service <id> <verb> successfully`; a failure is
//! returned as [`CliError::ActionFailed`] and printed by `main`. Requests for an
//! aliased service use the token of the alias' account.

use crate::{
    actions::utils::{print_data, records, required_string, text, text_or, ServiceTarget},
    commands::params::{
        DEFAULT_KEEPALIVE_WAIT_SECS, PARAMETER_ALL, PARAMETER_COMMAND, PARAMETER_PROJECT,
        PARAMETER_WAIT,
    },
    configuration::ServiceAlias,
    context::ExecutionContext,
    error::CliError,
    format::{Formattable, OutputFormat, Panel, Table},
    format_utils::FormatParams,
    output::Output,
    zeabur::{ClientError, ResponseData, ZeaburClient},
};
use clap::ArgMatches;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

const UNKNOWN_STATUS: &str = "UNKNOWN";

/// Service state changes that take a service and an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Restart,
    Stop,
    Start,
    Redeploy,
}

impl Lifecycle {
    /// Verb used in error messages, e.g. "Failed to restart service"
    pub fn verb(&self) -> &'static str {
        match self {
            Lifecycle::Restart => "restart",
            Lifecycle::Stop => "stop",
            Lifecycle::Start => "start",
            Lifecycle::Redeploy => "redeploy",
        }
    }

    /// Past tense used in success messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            Lifecycle::Restart => "restarted",
            Lifecycle::Stop => "stopped",
            Lifecycle::Start => "started",
            Lifecycle::Redeploy => "redeployed",
        }
    }

    async fn apply(
        &self,
        client: &ZeaburClient,
        service_id: &str,
        environment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        match self {
            Lifecycle::Restart => client.restart_service(service_id, environment_id).await,
            Lifecycle::Stop => client.suspend_service(service_id, environment_id).await,
            Lifecycle::Start => client.resume_service(service_id, environment_id).await,
            Lifecycle::Redeploy => client.redeploy_service(service_id, environment_id).await,
        }
    }
}

pub async fn list_services(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    let project_id = required_string(sub_matches, PARAMETER_PROJECT)?;
    let data = context.client(sub_matches)?.list_services(project_id).await?;

    if let OutputFormat::Json(options) = &format {
        return print_data(output, &data, options);
    }

    let services = records(data.get("project").and_then(|project| project.get("services")));
    if services.is_empty() {
        output.warning("No services found")?;
        return Ok(());
    }

    let mut table = Table::new("Services", ["ID", "Name", "Template", "Created"]);
    for service in services {
        table.row(vec![
            text(service, "_id"),
            text(service, "name"),
            text_or(service, "template", "-"),
            text_or(service, "createdAt", "-"),
        ]);
    }
    output.print(&table.format(&format)?)?;
    Ok(())
}

/// Restart, stop, start or redeploy a service.
pub async fn change_lifecycle(
    lifecycle: Lifecycle,
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let target = ServiceTarget::from_args(sub_matches, context.configuration())?;
    let environment_id = target.environment_id()?;
    let client = context.client_for_account(sub_matches, target.account.as_deref())?;

    run_lifecycle(lifecycle, &client, &target.service_id, environment_id, output).await
}

async fn run_lifecycle(
    lifecycle: Lifecycle,
    client: &ZeaburClient,
    service_id: &str,
    environment_id: &str,
    output: &mut Output,
) -> Result<(), CliError> {
    lifecycle
        .apply(client, service_id, environment_id)
        .await
        .map_err(CliError::action_failed(format!("{} service", lifecycle.verb())))?;

    info!("Service {} {}", service_id, lifecycle.past_tense());
    output.success(&format!(
        "Service {} {} successfully",
        service_id,
        lifecycle.past_tense()
    ))?;
    Ok(())
}

pub async fn service_status(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let format = FormatParams::from_args(sub_matches)?.format;
    if sub_matches.get_flag(PARAMETER_ALL) {
        return all_service_status(sub_matches, context, &format, output).await;
    }

    let target = ServiceTarget::from_args(sub_matches, context.configuration())?;
    let environment_id = target.environment_id()?;
    let data = context
        .client_for_account(sub_matches, target.account.as_deref())?
        .get_service_status(&target.service_id, environment_id)
        .await?;

    if let OutputFormat::Json(options) = &format {
        return print_data(output, &data, options);
    }

    let status = status_of(&data);

    match &format {
        OutputFormat::Csv(_) => {
            let panel = Panel::new("Service Status")
                .line("Service", target.service_id.as_str())
                .line("Environment", environment_id)
                .line("Status", status);
            output.print(&panel.format(&format)?)?;
        }
        _ => output.print(&format!("Service {}: {}", target.service_id, status))?,
    }
    Ok(())
}

fn status_of(data: &ResponseData) -> String {
    data.get("service")
        .map(|service| text_or(service, "status", UNKNOWN_STATUS))
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string())
}

/// Status of every configured alias. A lookup that fails, or that has no
/// environment or token to go on, is reported as `UNKNOWN`.
async fn all_service_status(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    format: &OutputFormat,
    output: &mut Output,
) -> Result<(), CliError> {
    let aliases = context.configuration().service_aliases();
    if aliases.is_empty() {
        output.warning("No service aliases configured")?;
        return Ok(());
    }

    let mut statuses = Vec::with_capacity(aliases.len());
    for (alias, service) in aliases {
        let status = alias_status(sub_matches, context, alias, service).await;
        statuses.push((alias, service, status));
    }

    if let OutputFormat::Json(options) = format {
        let mut data = Map::new();
        for (alias, service, status) in &statuses {
            let mut entry = Map::new();
            entry.insert("service_id".to_string(), Value::from(service.service_id.as_str()));
            entry.insert("status".to_string(), Value::from(status.as_str()));
            data.insert(alias.to_string(), Value::Object(entry));
        }
        return print_data(output, &data, options);
    }

    let mut table = Table::new("Service Status", ["Alias", "Name", "Service", "Status"]);
    for (alias, service, status) in statuses {
        table.row(vec![
            alias.clone(),
            service.name.clone().unwrap_or_else(|| "-".to_string()),
            service.service_id.clone(),
            status,
        ]);
    }
    output.print(&table.format(format)?)?;
    Ok(())
}

async fn alias_status(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    alias: &str,
    service: &ServiceAlias,
) -> String {
    let Some(environment_id) = service.environment_id.as_deref() else {
        warn!("Service alias '{}' has no environment", alias);
        return UNKNOWN_STATUS.to_string();
    };
    let client = match context.client_for_account(sub_matches, service.account.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            warn!("No client for service alias '{}': {}", alias, e);
            return UNKNOWN_STATUS.to_string();
        }
    };

    match client.get_service_status(&service.service_id, environment_id).await {
        Ok(data) => status_of(&data),
        Err(e) => {
            warn!("Failed to get the status of service alias '{}': {}", alias, e);
            UNKNOWN_STATUS.to_string()
        }
    }
}

/// Run a command inside the service container and show its exit code and output.
pub async fn execute(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let target = ServiceTarget::from_args(sub_matches, context.configuration())?;
    let environment_id = target.environment_id()?;
    let command: Vec<String> = sub_matches
        .get_many::<String>(PARAMETER_COMMAND)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let data = context
        .client_for_account(sub_matches, target.account.as_deref())?
        .execute_command(&target.service_id, environment_id, &command)
        .await
        .map_err(CliError::action_failed("execute command"))?;

    let result = data.get("executeCommand").unwrap_or(&Value::Null);
    output.print(&format!("Exit Code: {}", text_or(result, "exitCode", "N/A")))?;

    let panel = Panel::new("Output").line("", text(result, "output"));
    output.print(&panel.format(&OutputFormat::default())?)?;
    Ok(())
}

fn keepalive_wait(sub_matches: &ArgMatches) -> u64 {
    sub_matches
        .get_one::<u64>(PARAMETER_WAIT)
        .copied()
        .unwrap_or(DEFAULT_KEEPALIVE_WAIT_SECS)
}

/// Wake a service up: restart it, keep it running for a while, then suspend it again.
pub async fn keepalive(
    sub_matches: &ArgMatches,
    context: &ExecutionContext,
    output: &mut Output,
) -> Result<(), CliError> {
    let target = ServiceTarget::from_args(sub_matches, context.configuration())?;
    let environment_id = target.environment_id()?;
    let wait = keepalive_wait(sub_matches);
    let client = context.client_for_account(sub_matches, target.account.as_deref())?;

    run_lifecycle(Lifecycle::Restart, &client, &target.service_id, environment_id, output).await?;

    if wait > 0 {
        output.print(&format!("Waiting {} seconds before suspending...", wait))?;
        output.flush()?;
        debug!("Sleeping {}s", wait);
        tokio::time::sleep(Duration::from_secs(wait)).await;
    }

    run_lifecycle(Lifecycle::Stop, &client, &target.service_id, environment_id, output).await
}

#[cfg(test)]
mod tests {
    use super::keepalive_wait;
    use crate::actions::testing::{context_for, context_with, run, run_with_stored_token};
    use crate::api_key::store_api_key;
    use crate::commands::cli_command;
    use crate::configuration::{Configuration, ServiceAlias};
    use crate::error::CliError;
    use crate::queries;
    use httpmock::prelude::*;
    use serde_json::json;

    fn aliased() -> Configuration {
        let mut configuration = Configuration::default();
        configuration
            .add_service_alias(
                "api",
                ServiceAlias {
                    service_id: "svc-1".to_string(),
                    environment_id: Some("env-1".to_string()),
                    project_id: Some("prj-1".to_string()),
                    name: None,
                    account: None,
                },
            )
            .unwrap();
        configuration
    }

    #[tokio::test]
    async fn test_restart_by_alias() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::RESTART_SERVICE,
                "variables": {"serviceId": "svc-1", "environmentId": "env-1"}
            }));
            then.status(200).json_body(json!({"data": {"restartService": true}}));
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, out, _) = run(&mut context, &["service", "restart", "api"]).await;

        result.unwrap();
        mock.assert_async().await;
        assert_eq!(out, "✓ Service svc-1 restarted successfully\n");
    }

    #[tokio::test]
    async fn test_environment_flag_overrides_alias() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::SUSPEND_SERVICE,
                "variables": {"serviceId": "svc-1", "environmentId": "env-2"}
            }));
            then.status(200).json_body(json!({"data": {"suspendService": true}}));
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, out, _) = run(&mut context, &["service", "stop", "api", "-e", "env-2"]).await;

        result.unwrap();
        mock.assert_async().await;
        assert_eq!(out, "✓ Service svc-1 stopped successfully\n");
    }

    #[tokio::test]
    async fn test_start_and_redeploy_raw_ids() {
        let server = MockServer::start_async().await;
        let resume = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::RESUME_SERVICE,
                "variables": {"serviceId": "s9", "environmentId": "e9"}
            }));
            then.status(200).json_body(json!({"data": {"resumeService": true}}));
        });
        let redeploy = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::REDEPLOY_SERVICE,
                "variables": {"serviceId": "s9", "environmentId": "e9"}
            }));
            then.status(200).json_body(json!({"data": {"redeployService": true}}));
        });

        let (mut context, _dir) = context_for(&server);
        let (started, started_out, _) = run(&mut context, &["service", "start", "s9", "-e", "e9"]).await;
        let (redeployed, redeployed_out, _) =
            run(&mut context, &["service", "redeploy", "s9", "-e", "e9"]).await;

        started.unwrap();
        redeployed.unwrap();
        resume.assert_async().await;
        redeploy.assert_async().await;
        assert_eq!(started_out, "✓ Service s9 started successfully\n");
        assert_eq!(redeployed_out, "✓ Service s9 redeployed successfully\n");
    }

    #[tokio::test]
    async fn test_missing_environment_sends_nothing() {
        // no mock: any request would come back as a 404 transport error
        let server = MockServer::start_async().await;

        let (mut context, _dir) = context_for(&server);
        let (result, _, _) = run(&mut context, &["service", "restart", "raw-id"]).await;

        assert!(matches!(result, Err(CliError::MissingRequiredArgument(_))));
    }

    #[tokio::test]
    async fn test_restart_failure_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200)
                .json_body(json!({"errors": [{"message": "service is building"}]}));
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, out, _) = run(&mut context, &["service", "restart", "api"]).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to restart service: GraphQL error: service is building"
        );
        assert_eq!(err.exit_code().code(), 102);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_list_services_table() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::LIST_SERVICES,
                "variables": {"projectId": "p1"}
            }));
            then.status(200).json_body(json!({"data": {"project": {"services": [
                {"_id": "s1", "name": "api", "template": "GIT", "createdAt": "2024-03-01T10:00:00Z"}
            ]}}}));
        });

        let (mut context, _dir) = context_for(&server);
        let (result, out, _) = run(&mut context, &["service", "list", "--project", "p1"]).await;

        result.unwrap();
        mock.assert_async().await;
        assert!(out.starts_with("Services\nID  Name  Template  Created\n"));
        assert!(out.contains("s1  api   GIT       2024-03-01T10:00:00Z"));
    }

    #[tokio::test]
    async fn test_status_line_and_csv() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::SERVICE_STATUS,
                "variables": {"serviceId": "svc-1", "environmentId": "env-1"}
            }));
            then.status(200)
                .json_body(json!({"data": {"service": {"status": "RUNNING"}}}));
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, out, _) = run(&mut context, &["service", "status", "api"]).await;
        result.unwrap();
        assert_eq!(out, "Service svc-1: RUNNING\n");

        let (result, out, _) = run(&mut context, &["service", "status", "api", "-f", "csv"]).await;
        result.unwrap();
        assert_eq!(out, "svc-1,env-1,RUNNING\n");
    }

    #[tokio::test]
    async fn test_exec_prints_exit_code_and_output() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::EXECUTE_COMMAND,
                "variables": {
                    "serviceId": "svc-1",
                    "environmentId": "env-1",
                    "command": ["ls", "-la", "/app"]
                }
            }));
            then.status(200).json_body(json!({"data": {"executeCommand": {
                "exitCode": 0,
                "output": "total 0\nmain.rs"
            }}}));
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, out, _) =
            run(&mut context, &["service", "exec", "api", "--", "ls", "-la", "/app"]).await;

        result.unwrap();
        mock.assert_async().await;
        assert!(out.starts_with("Exit Code: 0\n"));
        assert!(out.contains(" Output "));
        assert!(out.contains("│ total 0  │"));
        assert!(out.contains("│ main.rs  │"));
    }

    #[tokio::test]
    async fn test_keepalive_restarts_then_suspends() {
        let server = MockServer::start_async().await;
        let restart = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::RESTART_SERVICE,
                "variables": {"serviceId": "svc-1", "environmentId": "env-1"}
            }));
            then.status(200).json_body(json!({"data": {"restartService": true}}));
        });
        let suspend = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::SUSPEND_SERVICE,
                "variables": {"serviceId": "svc-1", "environmentId": "env-1"}
            }));
            then.status(200).json_body(json!({"data": {"suspendService": true}}));
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, out, _) =
            run(&mut context, &["service", "keepalive", "api", "--wait", "0"]).await;

        result.unwrap();
        restart.assert_async().await;
        suspend.assert_async().await;
        assert_eq!(
            out,
            "✓ Service svc-1 restarted successfully\n✓ Service svc-1 stopped successfully\n"
        );
    }

    #[tokio::test]
    async fn test_keepalive_aborts_when_restart_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(500).body("oops");
        });

        let (mut context, _dir) = context_with(&server, aliased());
        let (result, _, _) =
            run(&mut context, &["service", "keepalive", "api", "--wait", "0"]).await;

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to restart service"));
        assert_eq!(err.exit_code().code(), 101);
    }

    fn alias_on(service_id: &str, environment_id: &str, account: Option<&str>) -> ServiceAlias {
        ServiceAlias {
            environment_id: Some(environment_id.to_string()),
            account: account.map(str::to_string),
            ..ServiceAlias::new(service_id)
        }
    }

    #[tokio::test]
    async fn test_aliases_use_their_account_token() {
        let server = MockServer::start_async().await;
        let work = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("authorization", "Bearer tok-work")
                .json_body(json!({
                    "query": queries::RESTART_SERVICE,
                    "variables": {"serviceId": "svc-a", "environmentId": "env-a"}
                }));
            then.status(200).json_body(json!({"data": {"restartService": true}}));
        });
        let home = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("authorization", "Bearer tok-home")
                .json_body(json!({
                    "query": queries::RESTART_SERVICE,
                    "variables": {"serviceId": "svc-b", "environmentId": "env-b"}
                }));
            then.status(200).json_body(json!({"data": {"restartService": true}}));
        });

        let mut configuration = Configuration::default();
        configuration
            .add_service_alias("a", alias_on("svc-a", "env-a", Some("work")))
            .unwrap();
        configuration
            .add_service_alias("b", alias_on("svc-b", "env-b", Some("home")))
            .unwrap();
        let (mut context, _dir) = context_with(&server, configuration);
        store_api_key(context.token_store(), "work", "tok-work").unwrap();
        store_api_key(context.token_store(), "home", "tok-home").unwrap();

        let (a, _, _) = run_with_stored_token(&mut context, &["service", "restart", "a"]).await;
        let (b, _, _) = run_with_stored_token(&mut context, &["service", "restart", "b"]).await;

        a.unwrap();
        b.unwrap();
        work.assert_async().await;
        home.assert_async().await;
    }

    #[tokio::test]
    async fn test_account_option_overrides_alias_account() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("authorization", "Bearer tok-home");
            then.status(200).json_body(json!({"data": {"suspendService": true}}));
        });

        let mut configuration = Configuration::default();
        configuration
            .add_service_alias("a", alias_on("svc-a", "env-a", Some("work")))
            .unwrap();
        let (mut context, _dir) = context_with(&server, configuration);
        store_api_key(context.token_store(), "work", "tok-work").unwrap();
        store_api_key(context.token_store(), "home", "tok-home").unwrap();

        let (result, _, _) = run_with_stored_token(
            &mut context,
            &["--account", "home", "service", "stop", "a"],
        )
        .await;

        result.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_of_all_aliases() {
        let server = MockServer::start_async().await;
        let running = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::SERVICE_STATUS,
                "variables": {"serviceId": "svc-a", "environmentId": "env-a"}
            }));
            then.status(200)
                .json_body(json!({"data": {"service": {"status": "RUNNING"}}}));
        });
        let failing = server.mock(|when, then| {
            when.method(POST).path("/graphql").json_body(json!({
                "query": queries::SERVICE_STATUS,
                "variables": {"serviceId": "svc-b", "environmentId": "env-b"}
            }));
            then.status(500).body("oops");
        });

        let mut configuration = Configuration::default();
        configuration
            .add_service_alias("a", alias_on("svc-a", "env-a", None))
            .unwrap();
        configuration
            .add_service_alias("b", alias_on("svc-b", "env-b", None))
            .unwrap();
        configuration
            .add_service_alias("c", ServiceAlias::new("svc-c"))
            .unwrap();
        let (mut context, _dir) = context_with(&server, configuration);

        let (result, out, _) = run(
            &mut context,
            &["service", "status", "--all", "-f", "csv", "--headers"],
        )
        .await;

        result.unwrap();
        running.assert_async().await;
        failing.assert_async().await;
        assert_eq!(
            out,
            "ALIAS,NAME,SERVICE,STATUS\na,-,svc-a,RUNNING\nb,-,svc-b,UNKNOWN\nc,-,svc-c,UNKNOWN\n"
        );
    }

    #[tokio::test]
    async fn test_status_of_all_aliases_without_token() {
        // no mock: without a token no request is made
        let server = MockServer::start_async().await;
        let mut configuration = Configuration::default();
        configuration
            .add_service_alias("a", alias_on("svc-a", "env-a", Some("work")))
            .unwrap();
        let (mut context, _dir) = context_with(&server, configuration);

        let (result, out, _) =
            run_with_stored_token(&mut context, &["service", "status", "--all"]).await;

        result.unwrap();
        assert!(out.starts_with("Service Status\nAlias  Name  Service  Status\n"));
        assert!(out.contains("svc-a    UNKNOWN"));
    }

    #[test]
    fn test_status_requires_a_service_or_all() {
        assert!(cli_command()
            .try_get_matches_from(["zcli", "service", "status"])
            .is_err());
        assert!(cli_command()
            .try_get_matches_from(["zcli", "service", "status", "api", "--all"])
            .is_err());
    }

    #[test]
    fn test_keepalive_wait_defaults_to_thirty_seconds() {
        let wait_of = |args: &[&str]| {
            let matches = cli_command().try_get_matches_from(args).unwrap();
            let (_, service) = matches.subcommand().unwrap();
            let (_, keepalive) = service.subcommand().unwrap();
            keepalive_wait(keepalive)
        };

        assert_eq!(wait_of(&["zcli", "service", "keepalive", "api"]), 30);
        assert_eq!(
            wait_of(&["zcli", "service", "keepalive", "api", "--wait", "5"]),
            5
        );
    }
}

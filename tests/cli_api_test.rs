//! End-to-end runs of the `zcli` binary against a mocked GraphQL endpoint.

use assert_cmd::prelude::*;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Configuration directory pointing the CLI at the mock server
fn config_dir(server: &MockServer, extra: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.yml"),
        format!("api_endpoint: {}\n{}", server.url("/graphql"), extra),
    )
    .unwrap();
    dir
}

fn zcli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zcli").unwrap();
    cmd.env("ZCLI_CONFIG_DIR", dir.path())
        .env_remove("ZEABUR_API_TOKEN")
        .env_remove("ZCLI_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_user_get_sends_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("authorization", "Bearer secret-token");
        then.status(200).json_body(json!({"data": {"me": {
            "_id": "u1", "username": "alice", "email": "a@x.io", "name": "Alice"
        }}}));
    });
    let dir = config_dir(&server, "");

    zcli(&dir)
        .args(["--token", "secret-token", "user", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Username: alice"));

    mock.assert();
}

#[test]
fn test_token_from_environment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("authorization", "Bearer env-token");
        then.status(200).json_body(json!({"data": {"projects": []}}));
    });
    let dir = config_dir(&server, "");

    zcli(&dir)
        .env("ZEABUR_API_TOKEN", "env-token")
        .args(["project", "list"])
        .assert()
        .success()
        .stdout("No projects found\n");

    mock.assert();
}

#[test]
fn test_restart_failure_goes_to_stderr() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({"errors": [{"message": "service not found"}]}));
    });
    let dir = config_dir(
        &server,
        "services:\n  api:\n    service_id: svc-1\n    environment_id: env-1\n",
    );

    zcli(&dir)
        .args(["--token", "t", "service", "restart", "api"])
        .assert()
        .failure()
        .code(102)
        .stdout("")
        .stderr(predicate::str::contains(
            "✗ Failed to restart service: GraphQL error: service not found",
        ));
}

#[test]
fn test_transport_failure_exit_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(502).body("bad gateway");
    });
    let dir = config_dir(&server, "");

    zcli(&dir)
        .args(["--token", "t", "project", "get", "p1"])
        .assert()
        .failure()
        .code(101)
        .stderr(predicate::str::contains("502"));
}

#[test]
fn test_config_path_uses_config_dir() {
    let server = MockServer::start();
    let dir = config_dir(&server, "");

    zcli(&dir)
        .args(["config", "get", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yml"));
}

#[test]
fn test_alias_added_through_cli_is_used() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body(json!({
            "query": zcli::queries::SERVICE_STATUS,
            "variables": {"serviceId": "svc-7", "environmentId": "env-7"}
        }));
        then.status(200)
            .json_body(json!({"data": {"service": {"status": "SUSPENDED"}}}));
    });
    let dir = config_dir(&server, "");

    zcli(&dir)
        .args([
            "config", "service", "add", "worker", "--service-id", "svc-7", "--environment-id",
            "env-7",
        ])
        .assert()
        .success();

    zcli(&dir)
        .args(["--token", "t", "service", "status", "worker"])
        .assert()
        .success()
        .stdout("Service svc-7: SUSPENDED\n");

    mock.assert();
}

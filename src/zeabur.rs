//! Zeabur GraphQL API client.
//!
//! Every public method sends one fixed document from [`crate::queries`] with its
//! variables bound, and hands back the `data` mapping of the response exactly as
//! the server produced it. Field extraction is left to the caller.

use crate::http_utils::{HttpClient, HttpRequestConfig, TransportError};
use crate::queries;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Default number of runtime log lines requested when the caller gives none
pub const DEFAULT_LOG_LIMIT: i64 = 100;

/// The `data` mapping of a GraphQL response, keyed by the server's field names
pub type ResponseData = Map<String, Value>;

/// GraphQL-level errors reported by the server, kept verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    errors: Vec<Value>,
}

impl ApiError {
    pub fn new(errors: Vec<Value>) -> Self {
        Self { errors }
    }

    /// The raw error objects as returned by the server
    pub fn errors(&self) -> &[Value] {
        &self.errors
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|error| match error.get("message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => error.to_string(),
            })
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ApiError {}

/// Error emitted by the Zeabur API client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("GraphQL error: {0}")]
    Api(#[from] ApiError),
    #[error("command must contain at least one token")]
    EmptyCommand,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

pub struct ZeaburClient {
    http: HttpClient,
    api_token: String,
}

impl ZeaburClient {
    /// Create a client for the default endpoint and timeout
    pub fn new(api_token: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(api_token, HttpRequestConfig::default())
    }

    pub fn with_config(
        api_token: impl Into<String>,
        config: HttpRequestConfig,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            api_token: api_token.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.http.config().endpoint
    }

    /// Send a GraphQL document and unwrap the `data` field of the answer.
    ///
    /// An empty or missing variable mapping leaves the `variables` key out of the
    /// request body altogether.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Map<String, Value>>,
    ) -> Result<ResponseData, ClientError> {
        let request = GraphQlRequest {
            query,
            variables: variables.filter(|variables| !variables.is_empty()),
        };

        let response: GraphQlResponse = self.http.post(&request, &self.api_token).await?;

        match response.errors {
            Some(errors) if !errors.is_empty() => {
                debug!("Server reported {} GraphQL error(s)", errors.len());
                Err(ApiError::new(errors).into())
            }
            _ => match response.data {
                None => Ok(ResponseData::new()),
                Some(Value::Object(data)) => Ok(data),
                Some(other) => {
                    debug!("GraphQL data is not an object: {}", other);
                    Ok(serde_json::from_value(other).map_err(TransportError::InvalidBody)?)
                }
            },
        }
    }

    // User

    pub async fn get_current_user(&self) -> Result<ResponseData, ClientError> {
        debug!("Fetching current user...");
        self.execute(queries::CURRENT_USER, None).await
    }

    // Projects

    pub async fn list_projects(&self) -> Result<ResponseData, ClientError> {
        debug!("Listing projects...");
        self.execute(queries::LIST_PROJECTS, None).await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<ResponseData, ClientError> {
        debug!("Fetching project {}...", project_id);
        self.execute(queries::GET_PROJECT, Some(project_variables(project_id)))
            .await
    }

    // Services

    pub async fn list_services(&self, project_id: &str) -> Result<ResponseData, ClientError> {
        debug!("Listing services of project {}...", project_id);
        self.execute(queries::LIST_SERVICES, Some(project_variables(project_id)))
            .await
    }

    pub async fn restart_service(
        &self,
        service_id: &str,
        environment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        debug!("Restarting service {} in {}...", service_id, environment_id);
        self.execute(
            queries::RESTART_SERVICE,
            Some(service_variables(service_id, environment_id)),
        )
        .await
    }

    pub async fn suspend_service(
        &self,
        service_id: &str,
        environment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        debug!("Suspending service {} in {}...", service_id, environment_id);
        self.execute(
            queries::SUSPEND_SERVICE,
            Some(service_variables(service_id, environment_id)),
        )
        .await
    }

    pub async fn resume_service(
        &self,
        service_id: &str,
        environment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        debug!("Resuming service {} in {}...", service_id, environment_id);
        self.execute(
            queries::RESUME_SERVICE,
            Some(service_variables(service_id, environment_id)),
        )
        .await
    }

    pub async fn redeploy_service(
        &self,
        service_id: &str,
        environment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        debug!("Redeploying service {} in {}...", service_id, environment_id);
        self.execute(
            queries::REDEPLOY_SERVICE,
            Some(service_variables(service_id, environment_id)),
        )
        .await
    }

    pub async fn get_service_status(
        &self,
        service_id: &str,
        environment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        debug!("Fetching status of service {} in {}...", service_id, environment_id);
        self.execute(
            queries::SERVICE_STATUS,
            Some(service_variables(service_id, environment_id)),
        )
        .await
    }

    /// Run a command inside a service container.
    ///
    /// An empty command is refused locally, no request is sent.
    pub async fn execute_command(
        &self,
        service_id: &str,
        environment_id: &str,
        command: &[String],
    ) -> Result<ResponseData, ClientError> {
        if command.is_empty() {
            return Err(ClientError::EmptyCommand);
        }

        debug!("Executing {:?} on service {}...", command, service_id);
        let mut variables = service_variables(service_id, environment_id);
        variables.insert(
            "command".to_string(),
            Value::Array(command.iter().cloned().map(Value::String).collect()),
        );
        self.execute(queries::EXECUTE_COMMAND, Some(variables)).await
    }

    // Logs

    /// Fetch runtime logs; `limit` falls back to [`DEFAULT_LOG_LIMIT`]
    pub async fn get_runtime_logs(
        &self,
        project_id: &str,
        service_id: &str,
        environment_id: &str,
        limit: Option<i64>,
    ) -> Result<ResponseData, ClientError> {
        let limit = limit.unwrap_or(DEFAULT_LOG_LIMIT);
        debug!("Fetching {} runtime log lines of service {}...", limit, service_id);

        let mut variables = project_variables(project_id);
        variables.extend(service_variables(service_id, environment_id));
        variables.insert("limit".to_string(), Value::from(limit));
        self.execute(queries::RUNTIME_LOGS, Some(variables)).await
    }

    pub async fn get_build_logs(
        &self,
        project_id: &str,
        deployment_id: &str,
    ) -> Result<ResponseData, ClientError> {
        debug!("Fetching build logs of deployment {}...", deployment_id);
        let mut variables = project_variables(project_id);
        variables.insert(
            "deploymentId".to_string(),
            Value::String(deployment_id.to_string()),
        );
        self.execute(queries::BUILD_LOGS, Some(variables)).await
    }

    // Environments

    pub async fn get_environments(&self, project_id: &str) -> Result<ResponseData, ClientError> {
        debug!("Listing environments of project {}...", project_id);
        self.execute(queries::GET_ENVIRONMENTS, Some(project_variables(project_id)))
            .await
    }
}

fn project_variables(project_id: &str) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("projectId".to_string(), Value::String(project_id.to_string()));
    variables
}

fn service_variables(service_id: &str, environment_id: &str) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("serviceId".to_string(), Value::String(service_id.to_string()));
    variables.insert(
        "environmentId".to_string(),
        Value::String(environment_id.to_string()),
    );
    variables
}

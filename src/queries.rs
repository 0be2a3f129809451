//! GraphQL documents sent to the Zeabur API.
//!
//! Each constant is one fixed query or mutation. Variables are bound by the
//! matching method on [`crate::zeabur::ZeaburClient`].

// User

pub const CURRENT_USER: &str = r#"
query {
    me {
        _id
        username
        email
        name
    }
}
"#;

// Projects

pub const LIST_PROJECTS: &str = r#"
query {
    projects {
        _id
        name
        description
        createdAt
    }
}
"#;

pub const GET_PROJECT: &str = r#"
query GetProject($projectId: ObjectID!) {
    project(_id: $projectId) {
        _id
        name
        description
        services {
            _id
            name
            template
        }
        environments {
            _id
            name
        }
    }
}
"#;

// Services

pub const LIST_SERVICES: &str = r#"
query GetServices($projectId: ObjectID!) {
    project(_id: $projectId) {
        services {
            _id
            name
            template
            createdAt
        }
    }
}
"#;

pub const RESTART_SERVICE: &str = r#"
mutation RestartService($serviceId: ObjectID!, $environmentId: ObjectID!) {
    restartService(serviceID: $serviceId, environmentID: $environmentId)
}
"#;

pub const SUSPEND_SERVICE: &str = r#"
mutation SuspendService($serviceId: ObjectID!, $environmentId: ObjectID!) {
    suspendService(serviceID: $serviceId, environmentID: $environmentId)
}
"#;

pub const RESUME_SERVICE: &str = r#"
mutation ResumeService($serviceId: ObjectID!, $environmentId: ObjectID!) {
    resumeService(serviceID: $serviceId, environmentID: $environmentId)
}
"#;

pub const REDEPLOY_SERVICE: &str = r#"
mutation RedeployService($serviceId: ObjectID!, $environmentId: ObjectID!) {
    redeployService(serviceID: $serviceId, environmentID: $environmentId)
}
"#;

pub const SERVICE_STATUS: &str = r#"
query GetServiceStatus($serviceId: ObjectID!, $environmentId: ObjectID!) {
    service(_id: $serviceId) {
        status(environmentID: $environmentId)
    }
}
"#;

pub const EXECUTE_COMMAND: &str = r#"
mutation ExecuteCommand($serviceId: ObjectID!, $environmentId: ObjectID!, $command: [String!]!) {
    executeCommand(serviceID: $serviceId, environmentID: $environmentId, command: $command) {
        exitCode
        output
    }
}
"#;

// Logs

pub const RUNTIME_LOGS: &str = r#"
query RuntimeLogs($projectId: ObjectID!, $serviceId: ObjectID!, $environmentId: ObjectID!, $limit: Int) {
    runtimeLogs(projectID: $projectId, serviceID: $serviceId, environmentID: $environmentId, limit: $limit) {
        message
        timestamp
    }
}
"#;

pub const BUILD_LOGS: &str = r#"
query BuildLogs($projectId: ObjectID!, $deploymentId: ObjectID!) {
    buildLogs(projectID: $projectId, deploymentID: $deploymentId) {
        message
        timestamp
    }
}
"#;

// Environments

pub const GET_ENVIRONMENTS: &str = r#"
query GetEnvironments($projectId: ObjectID!) {
    project(_id: $projectId) {
        environments {
            _id
            name
        }
    }
}
"#;

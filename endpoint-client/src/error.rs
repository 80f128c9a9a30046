use std::fmt;
use thiserror::Error;
use shared::types::PathType;
use crate::config::ProcessConfig;

/// Underlying failure carried by errors that wrap one
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised while resolving, authorizing or operating on a client.
///
/// Messages are complete on their own; the wrapped cause stays reachable
/// through `source()` for callers that need it.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Client with id {client_id} does not exist: {cause}")]
    UnknownClient {
        client_id: String,
        #[source]
        cause: BoxError,
    },

    #[error("Too many clients ({}) found for hostname: {hostname}", .candidate_client_ids.join(", "))]
    AmbiguousHostname {
        hostname: String,
        candidate_client_ids: Vec<String>,
    },

    #[error("No clients found for hostname: {hostname}")]
    UnknownHostname { hostname: String },

    #[error("No approval to the client {client_id} found: {cause}")]
    ApprovalMissing {
        client_id: String,
        #[source]
        cause: BoxError,
    },

    #[error("Flow with id {flow_id} is timed out{}", results_hint(.ui_link.as_deref()))]
    FlowTimeout {
        client_id: String,
        flow_id: String,
        /// Admin UI page of the flow, present when a UI base URL is configured
        ui_link: Option<String>,
        #[source]
        cause: Option<BoxError>,
    },

    #[error("Path `{path}` for client {client_id} is not a directory")]
    NotADirectory { client_id: String, path: String },

    #[error("Unsupported path type {path_type}")]
    UnsupportedPathType { path_type: PathType },
}

fn results_hint(ui_link: Option<&str>) -> String {
    match ui_link {
        Some(url) => format!(". Results will be available at {url} when the flow finishes"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Stable identifier of a `ClientError` variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownClient,
    AmbiguousHostname,
    UnknownHostname,
    ApprovalMissing,
    FlowTimeout,
    NotADirectory,
    UnsupportedPathType,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownClient => "unknown-client",
            ErrorKind::AmbiguousHostname => "ambiguous-hostname",
            ErrorKind::UnknownHostname => "unknown-hostname",
            ErrorKind::ApprovalMissing => "approval-missing",
            ErrorKind::FlowTimeout => "flow-timeout",
            ErrorKind::NotADirectory => "not-a-directory",
            ErrorKind::UnsupportedPathType => "unsupported-path-type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClientError {
    pub fn unknown_client(client_id: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        ClientError::UnknownClient {
            client_id: client_id.into(),
            cause: cause.into(),
        }
    }

    pub fn ambiguous_hostname<I, S>(hostname: impl Into<String>, candidate_client_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClientError::AmbiguousHostname {
            hostname: hostname.into(),
            candidate_client_ids: candidate_client_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn unknown_hostname(hostname: impl Into<String>) -> Self {
        ClientError::UnknownHostname {
            hostname: hostname.into(),
        }
    }

    pub fn approval_missing(client_id: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        ClientError::ApprovalMissing {
            client_id: client_id.into(),
            cause: cause.into(),
        }
    }

    /// Timed-out flow. When `config` carries an admin UI base URL the message
    /// points at the flow's page so results can be checked later.
    pub fn flow_timeout(
        config: &ProcessConfig,
        client_id: impl Into<String>,
        flow_id: impl Into<String>,
        cause: Option<BoxError>,
    ) -> Self {
        let client_id = client_id.into();
        let flow_id = flow_id.into();
        let ui_link = config.flow_url(&client_id, &flow_id);
        if ui_link.is_none() {
            tracing::debug!("No admin UI URL configured, omitting link for flow {}", flow_id);
        }

        ClientError::FlowTimeout {
            client_id,
            flow_id,
            ui_link,
            cause,
        }
    }

    pub fn not_a_directory(client_id: impl Into<String>, path: impl Into<String>) -> Self {
        ClientError::NotADirectory {
            client_id: client_id.into(),
            path: path.into(),
        }
    }

    pub fn unsupported_path_type(path_type: PathType) -> Self {
        ClientError::UnsupportedPathType { path_type }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::UnknownClient { .. } => ErrorKind::UnknownClient,
            ClientError::AmbiguousHostname { .. } => ErrorKind::AmbiguousHostname,
            ClientError::UnknownHostname { .. } => ErrorKind::UnknownHostname,
            ClientError::ApprovalMissing { .. } => ErrorKind::ApprovalMissing,
            ClientError::FlowTimeout { .. } => ErrorKind::FlowTimeout,
            ClientError::NotADirectory { .. } => ErrorKind::NotADirectory,
            ClientError::UnsupportedPathType { .. } => ErrorKind::UnsupportedPathType,
        }
    }

    /// Client the error concerns, for kinds that name one
    pub fn client_id(&self) -> Option<&str> {
        match self {
            ClientError::UnknownClient { client_id, .. }
            | ClientError::ApprovalMissing { client_id, .. }
            | ClientError::FlowTimeout { client_id, .. }
            | ClientError::NotADirectory { client_id, .. } => Some(client_id),
            ClientError::AmbiguousHostname { .. }
            | ClientError::UnknownHostname { .. }
            | ClientError::UnsupportedPathType { .. } => None,
        }
    }
}

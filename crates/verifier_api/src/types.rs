use thiserror::Error;

/// Failure of one REST call, split along the transport/application line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The endpoint could not be reached (connection refused, or the
    /// list endpoint answered 404, which this backend never does when up).
    #[error("server unreachable")]
    ServerUnreachable,
    /// The request timed out.
    #[error("request timed out")]
    Timeout,
    /// The backend answered with a structured error payload.
    #[error("{message}")]
    Application { message: String },
    /// Non-success status with no readable error payload.
    #[error("http status {0}")]
    Http(u16),
    /// Success status but the body did not match the contract.
    #[error("unexpected response body")]
    InvalidResponse,
    /// Anything else the transport reported.
    #[error("network error: {0}")]
    Network(String),
}

/// Event emitted by [`crate::ApiHandle`] when a request resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    SubmitCompleted {
        result: Result<String, ApiError>,
    },
    ListCompleted {
        result: Result<Vec<String>, ApiError>,
    },
    DeleteCompleted {
        url: String,
        result: Result<(), ApiError>,
    },
}

use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum TodoApiError {
    #[error("Configuration Error: Invalid base URL: {0}")]
    BaseUrlInvalid(#[from] UrlParseError),

    #[error("Configuration Error: Failed to build HTTP client: {0}")]
    HttpClientBuildFailed(reqwest::Error),

    // One variant per operation. The message is fixed and user-readable;
    // the underlying transport failure is logged, not carried.
    #[error("Failed to fetch todos. Please ensure the API server is running.")]
    Fetch,

    #[error("Failed to create todo. Please try again.")]
    Create,

    #[error("Failed to update todo. Please try again.")]
    Update,

    #[error("Failed to delete todo. Please try again.")]
    Delete,

    #[error("Failed to update todo status. Please try again.")]
    Toggle,

    #[error("Failed to filter todos. Please try again.")]
    Filter,

    #[error("Failed to fetch todo. Please try again.")]
    Get,
}

// Classification of a single failed round trip. Never returned to callers;
// operations log it and replace it with their TodoApiError variant.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request Error: Invalid endpoint URL: {0}")]
    EndpointInvalid(#[from] UrlParseError),

    #[error("Request Error: Failed to build or send the request: {0}")]
    RequestFailed(reqwest::Error),

    #[error("Network Error: Connection or timeout issue: {0}")]
    NetworkIssue(reqwest::Error),

    #[error("HTTP Error: Server responded with status {status}: {body}")]
    HttpError {
        // Server responded with non-2xx
        status: StatusCode,
        body: String, // The raw error body from the server
    },

    #[error("Response Error: Failed to deserialize response body: {0}")]
    DeserializationFailed(reqwest::Error),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

/// Every failure is fatal to the run; nothing is retried.
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("{board} request failed: {error}")]
    Http {
        board: &'static str,
        #[source]
        error: reqwest::Error,
    },

    #[error("{board} responded with {status}")]
    Status {
        board: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{board} returned an unexpected response: {error}")]
    Decode {
        board: &'static str,
        #[source]
        error: serde_json::Error,
    },
}

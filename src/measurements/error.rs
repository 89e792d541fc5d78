use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),
}

impl FetchError {
    /// The HTTP status code of the failed response, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(status.as_u16()),
            FetchError::NetworkRequest(_, e) | FetchError::BodyRead(_, e) => {
                e.status().map(|s| s.as_u16())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Response body is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Response body is not a JSON object")]
    NotAnObject,

    #[error("Response body has no 'results' key")]
    MissingResults,

    #[error("'results' is not an array")]
    ResultsNotArray,

    #[error("Result entry {index} is not a JSON object")]
    RecordNotObject { index: usize },
}

use thiserror::Error;

/// Errors raised while retrieving and re-encoding a submitted image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or transport failure
    #[error("HTTP error fetching {url}: {message}")]
    Http { url: String, message: String },
    /// The download did not finish within the configured timeout
    #[error("timed out after {seconds:.1}s fetching {url}")]
    Timeout { url: String, seconds: f64 },
    /// The server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The payload is not a raster image we can read
    #[error("could not decode image from {url}: {message}")]
    Decode { url: String, message: String },
    /// Re-encoding the normalized image failed
    #[error("could not encode image: {0}")]
    Encode(String),
}

/// Error types that can occur when talking to the inference endpoint.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Non-success status returned by the provider
    #[error("Provider error ({status}): {body}")]
    ProviderError { status: u16, body: String },
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
}

/// Any failure of the per-artwork pipeline.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl JudgeError {
    /// True when the artwork could not be loaded, as opposed to a failed model call.
    pub fn is_fetch(&self) -> bool {
        matches!(self, JudgeError::Fetch(_))
    }
}

/// Converts reqwest HTTP errors into InferenceErrors
impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        InferenceError::HttpError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_error_is_transparent_over_fetch() {
        let err: JudgeError = FetchError::Status {
            url: "https://example.com/a.png".to_string(),
            status: 404,
        }
        .into();
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), "https://example.com/a.png returned status 404");
    }

    #[test]
    fn inference_errors_are_not_fetch_errors() {
        let err: JudgeError = InferenceError::AuthError("401 Unauthorized".to_string()).into();
        assert!(!err.is_fetch());
        assert_eq!(err.to_string(), "Auth error: 401 Unauthorized");
    }
}

//! Error types for the request pipeline.
//!
//! # Design
//! The enum is flat: every stage of a call (build, send, classify, decode)
//! fails with one of these variants and the call aborts on the first one.
//! Status-derived variants carry no payload; the response body is dropped
//! once the status has been classified.

use thiserror::Error;

/// Errors returned by `RequestManager::request` and the stages it composes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The parameter payload of a POST endpoint could not be serialized.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[source] serde_json::Error),

    /// The server returned 400.
    #[error("bad request")]
    BadRequest,

    /// The server returned 401.
    #[error("unauthorized")]
    Unauthorized,

    /// The server returned 403.
    #[error("forbidden")]
    Forbidden,

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 500.
    #[error("server error")]
    ServerError,

    /// Catch-all: an unmapped status code, response metadata without HTTP
    /// structure, or any failure of the ureq-backed transport.
    #[error("unknown error")]
    Unknown,

    /// A success response body did not match the expected shape.
    #[error("decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The native transport failed before a response arrived. The source is
    /// the transport's own error, unmodified.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A method string that does not name a supported HTTP method.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl ApiError {
    /// True for the variants produced by status classification.
    pub fn is_status(&self) -> bool {
        matches!(
            self,
            ApiError::BadRequest
                | ApiError::Unauthorized
                | ApiError::Forbidden
                | ApiError::NotFound
                | ApiError::ServerError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_source_detail() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let msg = ApiError::Decode(err).to_string();
        assert!(msg.starts_with("decoding failed: "), "{msg}");
    }

    #[test]
    fn only_classified_statuses_report_is_status() {
        assert!(ApiError::NotFound.is_status());
        assert!(ApiError::ServerError.is_status());
        assert!(!ApiError::Unknown.is_status());
        assert!(!ApiError::UnsupportedMethod("TRACE".into()).is_status());
    }
}

//! Status classification.
//!
//! A single pass over the response metadata: anything other than an HTTP
//! head is `Unknown`, a 2xx status lets the call proceed to decoding, and the
//! handful of statuses callers act on get their own error variant.

use crate::error::ApiError;
use crate::http::ResponseMeta;

/// Check that `meta` is an HTTP head, then classify its status.
pub fn interpret(meta: &ResponseMeta) -> Result<(), ApiError> {
    match meta {
        ResponseMeta::Http(head) => classify(head.status),
        ResponseMeta::NonHttp => Err(ApiError::Unknown),
    }
}

/// Map a status code to `Ok(())` for 2xx or the matching `ApiError`.
pub fn classify(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        400 => Err(ApiError::BadRequest),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        404 => Err(ApiError::NotFound),
        500 => Err(ApiError::ServerError),
        _ => Err(ApiError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ResponseHead;
    use rstest::rstest;

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    #[case(299)]
    fn success_range_passes(#[case] status: u16) {
        assert!(classify(status).is_ok());
    }

    #[rstest]
    #[case(400, "bad request")]
    #[case(401, "unauthorized")]
    #[case(403, "forbidden")]
    #[case(404, "resource not found")]
    #[case(500, "server error")]
    fn mapped_statuses(#[case] status: u16, #[case] expected: &str) {
        let err = classify(status).unwrap_err();
        assert!(err.is_status());
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    #[case(100)]
    #[case(199)]
    #[case(300)]
    #[case(304)]
    #[case(402)]
    #[case(405)]
    #[case(418)]
    #[case(499)]
    #[case(501)]
    #[case(503)]
    fn everything_else_is_unknown(#[case] status: u16) {
        assert!(matches!(classify(status), Err(ApiError::Unknown)));
    }

    #[test]
    fn non_http_meta_skips_classification() {
        assert!(matches!(interpret(&ResponseMeta::NonHttp), Err(ApiError::Unknown)));
    }

    #[test]
    fn http_meta_is_classified() {
        let meta = ResponseMeta::Http(ResponseHead {
            status: 403,
            headers: Vec::new(),
        });
        assert!(matches!(interpret(&meta), Err(ApiError::Forbidden)));
    }
}

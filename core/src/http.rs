//! HTTP request and response types shared by every transport.
//!
//! # Design
//! These are plain data. The request builder produces an `HttpRequest`, a
//! `Transport` consumes it and hands back a `RawResponse`, and the classifier
//! and decoder read that. Nothing here knows which transport ran the call.
//!
//! All fields use owned types so a request can be moved onto another thread
//! (the ureq transport runs on tokio's blocking pool).

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(ApiError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A transport-ready request.
///
/// Built by `request::prepare` and moved into `Transport::send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Status line and headers of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

/// Metadata a transport reports alongside the payload.
///
/// Only `Http` metadata is classified. A transport that cannot produce a
/// status line reports `NonHttp` and the call fails with `ApiError::Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMeta {
    Http(ResponseHead),
    NonHttp,
}

/// Payload plus metadata, as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub body: Vec<u8>,
    pub meta: ResponseMeta,
}

impl RawResponse {
    /// Convenience constructor for an HTTP response.
    pub fn http(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            body,
            meta: ResponseMeta::Http(ResponseHead { status, headers }),
        }
    }
}

/// Header map as owned name/value pairs. Non-UTF-8 values are converted
/// lossily.
pub fn header_pairs(headers: &::http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect()
}

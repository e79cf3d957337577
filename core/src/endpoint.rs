//! Declarative endpoint descriptors.
//!
//! # Design
//! An `Endpoint` is built once per call through consuming builder methods and
//! is read-only afterwards. The parameter payload is generic over any
//! `Serialize` type so callers can pass a typed struct or a
//! `serde_json::Value`; serialization is deferred to `request::prepare`,
//! where a failure becomes `ApiError::InvalidParameters`.

use std::collections::HashMap;

use serde::Serialize;

use crate::http::HttpMethod;

/// One HTTP call described as data: url, method, headers and an optional
/// parameter payload.
#[derive(Debug, Clone)]
pub struct Endpoint<P = serde_json::Value> {
    url: String,
    method: HttpMethod,
    headers: HashMap<String, String>,
    parameters: Option<P>,
}

impl Endpoint {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            parameters: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }
}

impl<P> Endpoint<P> {
    /// Add a header. A later value for the same name replaces the earlier one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach a parameter payload, replacing any previous one.
    pub fn with_parameters<Q: Serialize>(self, parameters: Q) -> Endpoint<Q> {
        Endpoint {
            url: self.url,
            method: self.method,
            headers: self.headers,
            parameters: Some(parameters),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn parameters(&self) -> Option<&P> {
        self.parameters.as_ref()
    }
}

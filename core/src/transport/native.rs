//! `reqwest`-backed transport.

use async_trait::async_trait;
use reqwest::Client;

use super::Transport;
use crate::error::ApiError;
use crate::http::{header_pairs, HttpMethod, HttpRequest, RawResponse};

/// Async transport over a `reqwest::Client`.
///
/// Timeouts, pooling and TLS are whatever the client was built with. Errors
/// from the round trip or the body read are returned as
/// `ApiError::Transport` with the `reqwest::Error` as source.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(Box::new(err))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(RawResponse::http(status, headers, body.to_vec()))
    }
}

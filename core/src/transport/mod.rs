//! The transport capability and its two implementations.
//!
//! # Design
//! `Transport` has a single method: send a prepared request, get back the
//! payload and response metadata, or fail. `ReqwestTransport` drives an async
//! `reqwest::Client` and surfaces its errors as `ApiError::Transport`.
//! `UreqTransport` drives a blocking `ureq::Agent` through a completion
//! callback and collapses every failure into `ApiError::Unknown`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpRequest, RawResponse};

pub mod callback;
pub mod native;

pub use callback::UreqTransport;
pub use native::ReqwestTransport;

/// Sends one prepared request and returns the raw response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        (**self).send(request).await
    }
}

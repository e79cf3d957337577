//! The request façade.
//!
//! # Design
//! `RequestManager` holds only its transport. `request` runs the fixed
//! pipeline build → send → classify → decode and returns on the first error.
//! There is no retry, no timeout override and no shared state between calls;
//! dropping the returned future is the only cancellation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::decode::decode;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::ResponseMeta;
use crate::request::prepare;
use crate::status::interpret;
use crate::transport::Transport;

/// Sends endpoints through one transport and decodes the results.
#[derive(Debug, Clone)]
pub struct RequestManager<T> {
    transport: T,
}

impl<T: Transport> RequestManager<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform the call described by `endpoint` and decode a 2xx body as `R`.
    pub async fn request<R, P>(&self, endpoint: &Endpoint<P>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize,
    {
        let request = prepare(endpoint)?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.send(request).await?;
        if let ResponseMeta::Http(head) = &response.meta {
            debug!(status = head.status, bytes = response.body.len(), "received response");
        }

        interpret(&response.meta)?;
        decode(&response.body)
    }
}

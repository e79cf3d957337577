//! `ureq`-backed transport bridged from a completion callback.
//!
//! # Design
//! `ureq` is blocking. `UreqTransport::dispatch` runs a request on tokio's
//! blocking pool and reports the outcome through a caller-supplied
//! `FnOnce`, so it fires at most once by construction. `Transport::send`
//! bridges that callback into a future with a `oneshot` channel.
//!
//! Every failure on this path becomes `ApiError::Unknown`. The underlying
//! error is logged at `warn` and then dropped, unlike `ReqwestTransport`,
//! which returns it as the error source.

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::warn;
use ureq::http::{Request, Response};
use ureq::Agent;

use super::Transport;
use crate::error::ApiError;
use crate::http::{header_pairs, HttpRequest, RawResponse};

/// Outcome handed to a `dispatch` callback.
pub type Completion = Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>>;

/// Callback-driven transport over a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Agent that returns 4xx/5xx responses as data rather than `Err`.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a preconfigured agent. If it keeps ureq's default
    /// `http_status_as_error(true)`, every 4xx/5xx response reaches the
    /// caller as `ApiError::Unknown`.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }

    /// Run `request` on tokio's blocking pool and pass the outcome to
    /// `on_complete`. Must be called from within a tokio runtime.
    pub fn dispatch<F>(&self, request: HttpRequest, on_complete: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || on_complete(execute(&agent, request)));
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn execute(agent: &Agent, request: HttpRequest) -> Completion {
    let mut builder = Request::builder()
        .method(request.method.as_str())
        .uri(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let response = match request.body {
        Some(body) => agent.run(builder.body(body.as_slice())?)?,
        None => agent.run(builder.body(())?)?,
    };

    // ureq caps reads at 10 MB by default; reqwest reads the whole body.
    let (parts, mut body) = response.into_parts();
    let bytes = body.with_config().limit(u64::MAX).read_to_vec()?;
    Ok(Response::from_parts(parts, bytes))
}

fn into_raw(response: Response<Vec<u8>>) -> RawResponse {
    let status = response.status().as_u16();
    let headers = header_pairs(response.headers());
    RawResponse::http(status, headers, response.into_body())
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.dispatch(request, move |outcome| {
            // Receiver gone means the caller dropped the future.
            let _ = tx.send(outcome);
        });

        match rx.await {
            Ok(Ok(response)) => Ok(into_raw(response)),
            Ok(Err(err)) => {
                warn!(error = %err, "ureq request failed");
                Err(ApiError::Unknown)
            }
            Err(_) => {
                warn!("ureq request finished without reporting a result");
                Err(ApiError::Unknown)
            }
        }
    }
}

//! Transport-agnostic JSON request pipeline.
//!
//! # Overview
//! A caller describes a call as an `Endpoint`, hands it to a
//! `RequestManager`, and gets back a decoded value or an `ApiError`. The
//! manager runs one fixed path: build the request, send it through a
//! `Transport`, classify the status, decode the body.
//!
//! # Design
//! - `Transport` is a one-method trait. `ReqwestTransport` (async, native
//!   errors preserved) and `UreqTransport` (blocking agent bridged from a
//!   completion callback, errors collapsed to `Unknown`) are interchangeable.
//! - Only POST carries a body; parameters on other methods are ignored.
//! - The result type is a per-call generic bounded by `DeserializeOwned`.
//! - Nothing is shared between calls; the manager holds only its transport.

pub mod decode;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod manager;
pub mod request;
pub mod status;
pub mod transport;

pub use endpoint::Endpoint;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, RawResponse, ResponseHead, ResponseMeta};
pub use manager::RequestManager;
pub use transport::{ReqwestTransport, Transport, UreqTransport};

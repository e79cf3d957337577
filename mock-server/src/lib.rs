use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, Method, StatusCode},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Body returned by `/status/{code}` whatever the status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: u32,
    pub name: String,
}

impl Widget {
    pub fn fixture() -> Self {
        Self {
            id: 1,
            name: "sprocket".to_string(),
        }
    }
}

/// What `/echo` saw. `body` is `None` when the request had no body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

pub const MALFORMED_BODY: &str = "<html>definitely not json</html>";

/// Element served by `/repeat/{len}`.
pub const REPEATED_BYTE: u8 = 7;

pub fn app() -> Router {
    Router::new()
        .route("/status/{code}", any(status))
        .route("/echo", any(echo))
        .route("/malformed", any(malformed))
        .route("/repeat/{len}", any(repeat))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Widget>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    tracing::debug!(%status, "serving fixed status");
    Ok((status, Json(Widget::fixture())))
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body).into_owned())
    };
    Json(Echo {
        method: method.to_string(),
        headers,
        body,
    })
}

async fn malformed() -> &'static str {
    MALFORMED_BODY
}

/// JSON array of `len` sevens; about two bytes on the wire per element.
async fn repeat(Path(len): Path<usize>) -> Json<Vec<u8>> {
    Json(vec![REPEATED_BYTE; len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_fixture_serializes_to_json() {
        let json = serde_json::to_value(Widget::fixture()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "sprocket");
    }

    #[test]
    fn echo_without_body_serializes_null() {
        let echo = Echo {
            method: "GET".to_string(),
            headers: BTreeMap::new(),
            body: None,
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert!(json["body"].is_null());
    }

    #[test]
    fn malformed_body_is_not_json() {
        assert!(serde_json::from_str::<serde_json::Value>(MALFORMED_BODY).is_err());
    }
}

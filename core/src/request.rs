//! Turns an `Endpoint` into a transport-ready `HttpRequest`.

use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Build the request for `endpoint`.
///
/// Method and headers are copied as given; headers come out sorted by name.
/// Only POST carries a body: its parameters are serialized to JSON, and a
/// serialization failure aborts with `ApiError::InvalidParameters`. Every
/// other method is sent without a body even when parameters are set.
pub fn prepare<P: Serialize>(endpoint: &Endpoint<P>) -> Result<HttpRequest, ApiError> {
    let mut headers: Vec<(String, String)> = endpoint
        .headers()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    headers.sort();

    let body = match (endpoint.method(), endpoint.parameters()) {
        (HttpMethod::Post, Some(params)) => {
            Some(serde_json::to_vec(params).map_err(ApiError::InvalidParameters)?)
        }
        _ => None,
    };

    Ok(HttpRequest {
        method: endpoint.method(),
        url: endpoint.url().to_string(),
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use serde_json::json;

    #[test]
    fn post_serializes_parameters() {
        let ep = Endpoint::post("http://localhost:3000/items")
            .header("content-type", "application/json")
            .with_parameters(json!({"name": "sprocket", "qty": 2}));
        let req = prepare(&ep).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/items");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "sprocket");
        assert_eq!(body["qty"], 2);
    }

    #[test]
    fn non_post_never_attaches_body() {
        for method in [HttpMethod::Get, HttpMethod::Put, HttpMethod::Patch, HttpMethod::Delete] {
            let ep = Endpoint::new(method, "http://localhost").with_parameters(json!({"x": 1}));
            let req = prepare(&ep).unwrap();
            assert_eq!(req.method, method);
            assert!(req.body.is_none(), "{method} should not carry a body");
        }
    }

    #[test]
    fn post_without_parameters_has_no_body() {
        let req = prepare(&Endpoint::post("http://localhost")).unwrap();
        assert!(req.body.is_none());
    }

    #[test]
    fn unserializable_parameters_are_rejected() {
        // JSON object keys must be strings.
        let mut params = HashMap::new();
        params.insert((1, 2), "pair");
        let ep = Endpoint::post("http://localhost").with_parameters(params);
        let err = prepare(&ep).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameters(_)));
    }

    #[test]
    fn unserializable_parameters_ignored_for_get() {
        let mut params = HashMap::new();
        params.insert((1, 2), "pair");
        let ep = Endpoint::get("http://localhost").with_parameters(params);
        assert!(prepare(&ep).unwrap().body.is_none());
    }

    #[test]
    fn headers_are_sorted_by_name() {
        let ep = Endpoint::get("http://localhost")
            .header("x-b", "2")
            .header("accept", "application/json")
            .header("x-a", "1");
        let req = prepare(&ep).unwrap();
        let names: Vec<&str> = req.headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["accept", "x-a", "x-b"]);
    }
}

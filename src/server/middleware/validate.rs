//! Declarative request validation.
//!
//! Each validated route is wrapped with `validate_request` carrying its rule set as
//! middleware state. The body, query string and path params are collected into a
//! `RequestInput`, checked, and the request is rebuilt unchanged for the handler.

use std::{collections::HashMap, error::Error};

use axum::{
    body::{to_bytes, Body},
    extract::{
        rejection::RawPathParamsRejection, FromRequestParts, Query, RawPathParams, Request, State,
    },
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;
use serde_json::{Map, Value};

use crate::server::{
    error::AppError,
    middleware::BODY_LIMIT_BYTES,
    validation::{check, Location, RequestInput, RuleSet, ValidationErrors},
};

/// Runs the route's rule set and short-circuits with 400 on any failing field.
pub async fn validate_request(
    State(rules): State<RuleSet>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let bytes = to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|e| {
        if exceeds_limit(&e) {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(format!("Failed to read request body: {}", e))
        }
    })?;

    let body_fields = parse_body(&bytes)?;

    let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map_err(|_| ValidationErrors::single(Location::Query, "query", "Malformed query string"))?
        .0;

    let params = match RawPathParams::from_request_parts(&mut parts, &()).await {
        Ok(raw) => raw
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<String, String>>(),
        Err(RawPathParamsRejection::MissingPathParams(_)) => HashMap::new(),
        Err(_) => {
            return Err(
                ValidationErrors::single(Location::Params, "params", "Malformed path parameters").into(),
            )
        }
    };

    check(rules, &RequestInput::new(body_fields, query, params))?;

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Whether the body read stopped at a length limit, ours or the outer body limit layer's.
fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(err) = source {
        if err.is::<LengthLimitError>() {
            return true;
        }
        source = err.source();
    }
    false
}

/// An empty body validates as an empty object.
fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, ValidationErrors> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(ValidationErrors::single(
            Location::Body,
            "body",
            "Request body must be a JSON object",
        )),
        Err(_) => Err(ValidationErrors::single(
            Location::Body,
            "body",
            "Request body is not valid JSON",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_an_empty_object() {
        assert!(parse_body(b"").unwrap().is_empty());
        assert!(parse_body(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = parse_body(b"[1, 2]").unwrap_err();
        assert!(errors.contains("body"));
    }

    #[test]
    fn rejects_malformed_json() {
        let errors = parse_body(b"{\"title\":").unwrap_err();
        assert!(errors.contains("body"));
    }

    #[tokio::test]
    async fn oversized_body_is_a_length_limit_error() {
        let err = to_bytes(Body::from(vec![b' '; 8]), 4).await.unwrap_err();
        assert!(exceeds_limit(&err));
    }

    #[test]
    fn other_read_errors_are_not_length_limits() {
        let err = axum::Error::new(std::io::Error::other("connection reset"));
        assert!(!exceeds_limit(&err));
    }

    #[test]
    fn keeps_object_fields() {
        let fields = parse_body(br#"{"title":"Song","duration":120}"#).unwrap();
        assert_eq!(fields.get("title"), Some(&Value::String("Song".to_string())));
        assert_eq!(fields.len(), 2);
    }
}

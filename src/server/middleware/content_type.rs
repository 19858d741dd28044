use axum::{
    body::HttpBody,
    extract::Request,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE, TRANSFER_ENCODING},
    middleware::Next,
    response::Response,
};

use crate::server::error::AppError;

/// Rejects requests that carry or declare a non-JSON body with 415.
///
/// A request passes when it declares `application/json` (parameters such as
/// `charset` are allowed), or when it declares nothing and carries no body. A body of
/// unknown length counts as carried: a chunked transfer or any stream not already at
/// its end is rejected without a declared type.
pub async fn require_json(request: Request, next: Next) -> Result<Response, AppError> {
    let headers = request.headers();

    match headers.get(CONTENT_TYPE) {
        Some(value) => {
            let declared = value.to_str().unwrap_or_default();
            if !is_json(declared) {
                return Err(AppError::UnsupportedMediaType(declared.to_string()));
            }
        }
        None => {
            let declared_length = headers
                .get(CONTENT_LENGTH)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(0);

            let body = request.body();
            let carries_body = declared_length > 0
                || headers.contains_key(TRANSFER_ENCODING)
                || body.size_hint().lower() > 0
                || !body.is_end_stream();

            if carries_body {
                return Err(AppError::UnsupportedMediaType("none".to_string()));
            }
        }
    }

    Ok(next.run(request).await)
}

pub(crate) fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

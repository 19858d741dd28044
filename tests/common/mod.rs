#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use tracklist::server::{config::Config, startup::Application};

/// Builds the full application on a fresh in-memory database.
///
/// Rate limiting is disabled; tests that exercise it attach a `ConnectInfo` peer.
pub async fn spawn_app() -> Application {
    spawn_app_with(test_config()).await
}

pub fn test_config() -> Config {
    let mut config = Config::new("sqlite::memory:");
    config.database_max_connections = 1;
    config.rate_limit = None;
    config
}

pub async fn spawn_app_with(config: Config) -> Application {
    Application::build(&config).await.unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` part of the session cookie set on `response`, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(|pair| pair.trim().to_string())
        .find(|pair| pair.starts_with("id="))
}

/// Signs up a user and returns its id with the session cookie.
pub async fn signup(router: &Router, username: &str, email: &str) -> (i64, String) {
    let response = send(
        router,
        json_request(
            Method::POST,
            "/v1/users",
            serde_json::json!({
                "username": username,
                "email": email,
                "password": "secret123",
            }),
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie(&response).unwrap();
    let body = body_json(response).await;

    (body["data"]["id"].as_i64().unwrap(), cookie)
}

/// Creates a track owned by the session's user and returns its id.
pub async fn create_track(router: &Router, cookie: &str, body: Value) -> i64 {
    let response = send(
        router,
        json_request(Method::POST, "/v1/tracks", body, Some(cookie)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

//! Route table and application-wide layers.
//!
//! Every route is assembled from the same stages: the content-type check, then the
//! route's validation rules, then the auth gate when the route is protected, then the
//! handler. The per-route stages are attached with `route_layer`, so they only run for
//! a method the path answers. Methods sharing a path are merged into one registration,
//! and any other method gets the 405 envelope.

use std::{any::Any, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, DefaultBodyLimit, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware::{from_fn, from_fn_with_state, map_response},
    response::Response,
    routing::{delete, get, patch, post, MethodRouter},
    Router,
};
use tokio::task::JoinHandle;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use tracing::Level;

use crate::server::{
    config::Config,
    controller::{
        album::{create_album, delete_album, get_album, list_albums, update_album},
        auth::{login, logout, XSRF_TOKEN_HEADER},
        genre::{create_genre, delete_genre, get_genre, list_genres, update_genre},
        health::{health, method_not_allowed, no_content, route_not_found},
        track::{create_track, delete_track, get_track, list_tracks, update_track},
        user::{create_user, delete_user, get_user, list_users, me, seed_users, update_user},
    },
    docs::openapi,
    error::{config::ConfigError, internal_server_error, AppError},
    middleware::{
        auth::{end_session_on_success, require_login},
        content_type::require_json,
        envelope::error_envelope,
        rate_limit, security_headers,
        validate::validate_request,
        BODY_LIMIT_BYTES,
    },
    state::AppState,
    validation::{rules, RuleSet},
};

/// Request header the web client echoes the XSRF token back in.
const XSRF_REQUEST_HEADER: HeaderName = HeaderName::from_static("x-xsrf-token");

/// Runs `rules` before the route's handler.
fn checked(route: MethodRouter<AppState>, rules: RuleSet) -> MethodRouter<AppState> {
    route.route_layer(from_fn_with_state(rules, validate_request))
}

/// Requires an authenticated session before the route's handler.
fn protected(route: MethodRouter<AppState>, state: &AppState) -> MethodRouter<AppState> {
    route.route_layer(from_fn_with_state(state.clone(), require_login))
}

/// The `/v1` API routes.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/favicon.ico", get(no_content).post(no_content))
        .route("/robots.txt", get(no_content).post(no_content))
        .route("/openapi.json", get(openapi))
        .route("/login", checked(post(login), rules::LOGIN))
        .route("/logout", post(logout))
        .route(
            "/users",
            get(list_users).merge(checked(post(create_user), rules::CREATE_USER)),
        )
        .route("/users/me", protected(get(me), state))
        .route("/users/seed", checked(post(seed_users), rules::SEED_USERS))
        .route(
            "/users/{id}",
            checked(get(get_user), rules::GET_USER)
                .merge(checked(
                    protected(patch(update_user), state),
                    rules::UPDATE_USER,
                ))
                .merge(checked(
                    protected(
                        delete(delete_user).route_layer(from_fn(end_session_on_success)),
                        state,
                    ),
                    rules::DELETE_USER,
                )),
        )
        .route(
            "/tracks",
            checked(get(list_tracks), rules::LIST_TRACKS).merge(checked(
                protected(post(create_track), state),
                rules::CREATE_TRACK,
            )),
        )
        .route(
            "/tracks/{id}",
            checked(get(get_track), rules::GET_TRACK)
                .merge(checked(
                    protected(patch(update_track), state),
                    rules::UPDATE_TRACK,
                ))
                .merge(checked(
                    protected(delete(delete_track), state),
                    rules::DELETE_TRACK,
                )),
        )
        .route(
            "/genres",
            get(list_genres).merge(checked(
                protected(post(create_genre), state),
                rules::CREATE_GENRE,
            )),
        )
        .route(
            "/genres/{id}",
            checked(get(get_genre), rules::BY_ID)
                .merge(checked(
                    protected(patch(update_genre), state),
                    rules::UPDATE_GENRE,
                ))
                .merge(checked(protected(delete(delete_genre), state), rules::BY_ID)),
        )
        .route(
            "/albums",
            get(list_albums).merge(checked(
                protected(post(create_album), state),
                rules::CREATE_ALBUM,
            )),
        )
        .route(
            "/albums/{id}",
            checked(get(get_album), rules::BY_ID)
                .merge(checked(
                    protected(patch(update_album), state),
                    rules::UPDATE_ALBUM,
                ))
                .merge(checked(protected(delete(delete_album), state), rules::BY_ID)),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .layer(from_fn(require_json))
}

/// Assembles the complete application with every cross-cutting layer.
///
/// # Returns
/// - `Ok((router, cleanup))` - The ready router and the rate limiter cleanup task, if any
/// - `Err(AppError::ConfigErr(_))` - CORS origin or rate limit settings are invalid
pub fn build_app(
    state: AppState,
    session_layer: SessionManagerLayer<SqliteStore>,
    config: &Config,
) -> Result<(Router, Option<JoinHandle<()>>), AppError> {
    let api = router(&state);

    let app = Router::new()
        .nest("/v1", api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(session_layer)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

    let (app, cleanup) = rate_limit::apply(app, config)?;

    let app = app
        .layer(map_response(error_envelope))
        .layer(CatchPanicLayer::custom(handle_panic));

    let trust_proxy = config.trust_proxy;
    let app = security_headers::apply(app)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        ip = %client_ip(request, trust_proxy)
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(config)?);

    Ok((app, cleanup))
}

fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(&config.web_client_url).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "WEB_CLIENT_URL".to_string(),
            value: config.web_client_url.clone(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT, XSRF_REQUEST_HEADER])
        .expose_headers([XSRF_TOKEN_HEADER]))
}

/// The address the request originated from.
///
/// Behind a trusted proxy this is the first `X-Forwarded-For` entry, otherwise the
/// socket peer.
fn client_ip<B>(request: &axum::http::Request<B>, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty());

        if let Some(ip) = forwarded {
            return ip;
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Converts a handler panic into the generic 500 envelope.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    internal_server_error()
}

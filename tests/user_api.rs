mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tracklist::server::config::AppEnv;

use common::{
    body_json, create_track, empty_request, json_request, send, session_cookie, signup, spawn_app,
    spawn_app_with, test_config,
};

#[tokio::test]
async fn signup_logs_in_and_duplicate_conflicts() {
    let app = spawn_app().await;
    let body = json!({"username": "ann", "email": "a@x.com", "password": "secret123"});

    let response = send(
        &app.router,
        json_request(Method::POST, "/v1/users", body.clone(), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(session_cookie(&response).is_some());
    let token = response.headers().get("xsrf-token").unwrap();
    assert_eq!(token.len(), 32);

    let created = body_json(response).await;
    assert_eq!(created["status"], 201);
    assert!(created["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(created["data"]["username"], "ann");
    assert!(created["data"].get("password").is_none());

    let repeat = send(
        &app.router,
        json_request(Method::POST, "/v1/users", body, None),
    )
    .await;
    assert_eq!(repeat.status(), StatusCode::CONFLICT);

    let users = body_json(send(&app.router, empty_request(Method::GET, "/v1/users", None)).await).await;
    assert_eq!(users["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = spawn_app().await;
    signup(&app.router, "ann", "a@x.com").await;

    let response = send(
        &app.router,
        json_request(
            Method::POST,
            "/v1/users",
            json!({"username": "anne", "email": "A@X.com", "password": "secret123"}),
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["status"], 409);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn signup_missing_field_lists_it() {
    let app = spawn_app().await;

    let response = send(
        &app.router,
        json_request(
            Method::POST,
            "/v1/users",
            json!({"email": "a@x.com", "password": "secret123"}),
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let fields = body["data"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["location"], "body");
    assert_eq!(fields[0]["field"], "username");

    let users = body_json(send(&app.router, empty_request(Method::GET, "/v1/users", None)).await).await;
    assert!(users["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_user_is_404_without_data() {
    let app = spawn_app().await;

    let response = send(&app.router, empty_request(Method::GET, "/v1/users/4242", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], 404);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn malformed_user_id_is_400() {
    let app = spawn_app().await;

    let response = send(&app.router, empty_request(Method::GET, "/v1/users/abc", None)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["location"], "params");
    assert_eq!(body["data"][0]["field"], "id");
}

#[tokio::test]
async fn get_user_includes_tracks() {
    let app = spawn_app().await;
    let (id, cookie) = signup(&app.router, "ann", "a@x.com").await;
    create_track(&app.router, &cookie, json!({"title": "First"})).await;

    let response = send(
        &app.router,
        empty_request(Method::GET, &format!("/v1/users/{}", id), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tracks = body["data"]["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["title"], "First");
}

#[tokio::test]
async fn me_requires_session() {
    let app = spawn_app().await;

    let anonymous = send(&app.router, empty_request(Method::GET, "/v1/users/me", None)).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let (id, cookie) = signup(&app.router, "ann", "a@x.com").await;
    let response = send(
        &app.router,
        empty_request(Method::GET, "/v1/users/me", Some(&cookie)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn update_own_account() {
    let app = spawn_app().await;
    let (id, cookie) = signup(&app.router, "ann", "a@x.com").await;

    let response = send(
        &app.router,
        json_request(
            Method::PATCH,
            &format!("/v1/users/{}", id),
            json!({"username": "annie"}),
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["username"], "annie");
    assert_eq!(body["data"]["email"], "a@x.com");
}

#[tokio::test]
async fn update_other_account_is_forbidden_and_unchanged() {
    let app = spawn_app().await;
    let (ann_id, _) = signup(&app.router, "ann", "a@x.com").await;
    let (_, bob_cookie) = signup(&app.router, "bob", "b@x.com").await;

    let response = send(
        &app.router,
        json_request(
            Method::PATCH,
            &format!("/v1/users/{}", ann_id),
            json!({"username": "hijacked"}),
            Some(&bob_cookie),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let reloaded = body_json(
        send(
            &app.router,
            empty_request(Method::GET, &format!("/v1/users/{}", ann_id), None),
        )
        .await,
    )
    .await;
    assert_eq!(reloaded["data"]["username"], "ann");
}

#[tokio::test]
async fn update_to_taken_username_or_email_conflicts() {
    let app = spawn_app().await;
    signup(&app.router, "ann", "a@x.com").await;
    let (bob_id, bob_cookie) = signup(&app.router, "bob", "b@x.com").await;

    for patch in [json!({"username": "ann"}), json!({"email": "a@x.com"})] {
        let response = send(
            &app.router,
            json_request(
                Method::PATCH,
                &format!("/v1/users/{}", bob_id),
                patch.clone(),
                Some(&bob_cookie),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT, "{}", patch);
        let body = body_json(response).await;
        assert_eq!(body["status"], 409);
        assert_eq!(body["error"], "Conflict");
    }

    let reloaded = body_json(
        send(
            &app.router,
            empty_request(Method::GET, &format!("/v1/users/{}", bob_id), None),
        )
        .await,
    )
    .await;
    assert_eq!(reloaded["data"]["username"], "bob");
    assert_eq!(reloaded["data"]["email"], "b@x.com");
}

#[tokio::test]
async fn update_missing_user_is_404() {
    let app = spawn_app().await;
    let (_, cookie) = signup(&app.router, "ann", "a@x.com").await;

    let response = send(
        &app.router,
        json_request(
            Method::PATCH,
            "/v1/users/4242",
            json!({"username": "ghost"}),
            Some(&cookie),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_account_ends_session() {
    let app = spawn_app().await;
    let (id, cookie) = signup(&app.router, "ann", "a@x.com").await;

    let response = send(
        &app.router,
        empty_request(Method::DELETE, &format!("/v1/users/{}", id), Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let me = send(
        &app.router,
        empty_request(Method::GET, "/v1/users/me", Some(&cookie)),
    )
    .await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);

    let gone = send(
        &app.router,
        empty_request(Method::GET, &format!("/v1/users/{}", id), None),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_other_account_is_forbidden() {
    let app = spawn_app().await;
    let (ann_id, ann_cookie) = signup(&app.router, "ann", "a@x.com").await;
    let (_, bob_cookie) = signup(&app.router, "bob", "b@x.com").await;

    let response = send(
        &app.router,
        empty_request(
            Method::DELETE,
            &format!("/v1/users/{}", ann_id),
            Some(&bob_cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let me = send(
        &app.router,
        empty_request(Method::GET, "/v1/users/me", Some(&ann_cookie)),
    )
    .await;
    assert_eq!(me.status(), StatusCode::OK);

    let bob_me = send(
        &app.router,
        empty_request(Method::GET, "/v1/users/me", Some(&bob_cookie)),
    )
    .await;
    assert_eq!(bob_me.status(), StatusCode::OK);
}

#[tokio::test]
async fn seed_creates_users_and_reports_total() {
    let app = spawn_app().await;
    signup(&app.router, "ann", "a@x.com").await;

    let response = send(
        &app.router,
        empty_request(Method::POST, "/v1/users/seed?amount=3", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "3 users created. There are 4 users now in DB.");
    assert_eq!(body["data"]["created"], 3);
    assert_eq!(body["data"]["total"], 4);
}

#[tokio::test]
async fn seed_rejects_out_of_range_amount() {
    let app = spawn_app().await;

    for uri in ["/v1/users/seed?amount=0", "/v1/users/seed?amount=101", "/v1/users/seed"] {
        let response = send(&app.router, empty_request(Method::POST, uri, None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body = body_json(response).await;
        assert_eq!(body["data"][0]["field"], "amount");
        assert_eq!(body["data"][0]["location"], "query");
    }
}

#[tokio::test]
async fn seed_is_hidden_in_production() {
    let mut config = test_config();
    config.app_env = AppEnv::Production;
    let app = spawn_app_with(config).await;

    let response = send(
        &app.router,
        empty_request(Method::POST, "/v1/users/seed?amount=3", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! HTTP-level tests for registration, login, password changes and RBAC.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user, get, get_auth, patch_json_auth, post_json, TEST_PASSWORD,
};
use lostfound_api::auth::jwt::generate_token;
use lostfound_core::status::UserStatus;
use lostfound_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn registration(name: &str, email: &str, password: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": email,
        "password": password,
        "confirmPassword": password,
        "profile": { "bio": "Commutes by bus", "age": 31 }
    })
}

async fn login(app: axum::Router, username_or_email: &str, password: &str) -> axum::response::Response {
    post_json(
        app,
        "/api/login",
        json!({ "usernameOrEmail": username_or_email, "password": password }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_user_with_profile(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/register",
        registration("ann", "ann@example.com", "s3cret-pass"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["statusCode"], 201);
    assert_eq!(json["message"], "User registered successfully");
    assert_eq!(json["data"]["email"], "ann@example.com");
    assert_eq!(json["data"]["role"], "user");
    assert_eq!(json["data"]["profile"]["age"], 31);
    assert!(
        json["data"].get("passwordHash").is_none(),
        "password hash must never be serialized"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_rejected_with_409(pool: PgPool) {
    let body = registration("ann", "ann@example.com", "s3cret-pass");

    let first = post_json(common::build_test_app(pool.clone()), "/api/register", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(common::build_test_app(pool), "/api/register", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["success"], false);
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn validation_failures_are_joined_into_one_message(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/register",
        json!({
            "name": "",
            "email": "not-an-email",
            "password": "short",
            "confirmPassword": "short"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Email must be a valid email address, Name is required, \
         Password must be at least 8 characters long"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mismatched_confirmation_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/register",
        json!({
            "name": "ann",
            "email": "ann@example.com",
            "password": "s3cret-pass",
            "confirmPassword": "other-pass"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Passwords don't match");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_a_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/register", json!({ "name": "ann" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

// ---------------------------------------------------------------------------
// Login and password change
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn password_change_swaps_accepted_credentials(pool: PgPool) {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/register",
        registration("ann", "ann@example.com", "old-password"),
    )
    .await;

    let response = login(common::build_test_app(pool.clone()), "ann@example.com", "old-password").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User logged in successfully");
    let token = json["data"]["token"].as_str().unwrap().to_string();

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        "/api/change-password",
        json!({
            "currentPassword": "old-password",
            "newPassword": "new-password",
            "confirmNewPassword": "new-password"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let with_new = login(common::build_test_app(pool.clone()), "ann", "new-password").await;
    assert_eq!(with_new.status(), StatusCode::OK);

    let with_old = login(common::build_test_app(pool), "ann@example.com", "old-password").await;
    assert_eq!(with_old.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_current_password_is_401(pool: PgPool) {
    let (_user, token) = create_user(&pool, "ann", "user").await;
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        "/api/change-password",
        json!({
            "currentPassword": "not-it",
            "newPassword": "new-password",
            "confirmNewPassword": "new-password"
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Current password is incorrect");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_and_wrong_password_look_the_same(pool: PgPool) {
    create_user(&pool, "ann", "user").await;

    let wrong = login(common::build_test_app(pool.clone()), "ann", "nope-nope").await;
    let ghost = login(common::build_test_app(pool), "ghost", TEST_PASSWORD).await;

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ghost.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await["message"], body_json(ghost).await["message"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blocked_user_cannot_log_in(pool: PgPool) {
    let (user, _token) = create_user(&pool, "ann", "user").await;
    UserRepo::update_status(&pool, user.id, UserStatus::Blocked)
        .await
        .unwrap();

    let response = login(common::build_test_app(pool), "ann", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Token handling and RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_route_without_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/my-found-items").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "You are not authorized!");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/my-found-items", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Invalid or expired token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_routes_reject_regular_users(pool: PgPool) {
    let (_user, token) = create_user(&pool, "ann", "user").await;

    for uri in ["/api/users", "/api/website-metrics", "/api/claims"] {
        let response = get_auth(common::build_test_app(pool.clone()), uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_can_block_and_list_users(pool: PgPool) {
    let (_admin, admin_token) = create_user(&pool, "root", "admin").await;
    let (user, _token) = create_user(&pool, "ann", "user").await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/users/{}/status", user.id),
        json!({ "status": "blocked" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "blocked");

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        "/api/status",
        json!({ "userId": user.id, "status": "suspended-ish" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(common::build_test_app(pool), "/api/users", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blocking_an_account_revokes_its_live_token(pool: PgPool) {
    let (_admin, admin_token) = create_user(&pool, "root", "admin").await;
    let (user, token) = create_user(&pool, "ann", "user").await;

    let before = get_auth(common::build_test_app(pool.clone()), "/api/my-found-items", &token).await;
    assert_eq!(before.status(), StatusCode::OK);

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/users/{}/status", user.id),
        json!({ "status": "blocked" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = get_auth(common::build_test_app(pool), "/api/my-found-items", &token).await;
    assert_eq!(after.status(), StatusCode::FORBIDDEN);
    let json = body_json(after).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Your account has been blocked");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_account_token_is_401(pool: PgPool) {
    let (user, token) = create_user(&pool, "ann", "user").await;
    UserRepo::delete(&pool, user.id).await.unwrap();

    let response = get_auth(common::build_test_app(pool), "/api/my-found-items", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "You are not authorized!");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_comes_from_the_account_not_the_token(pool: PgPool) {
    let (user, _token) = create_user(&pool, "ann", "user").await;
    let forged = generate_token(user.id, &user.email, "admin", &common::test_config().jwt).unwrap();

    let response = get_auth(common::build_test_app(pool), "/api/users", &forged).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

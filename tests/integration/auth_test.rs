//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::{self, TestApp};

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.create_test_user("login@test.com", "Password123", "member")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "login@test.com",
                "password": "Password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert_eq!(response.body["data"]["user"]["role"], "member");

    // The refresh token travels only in the HTTP-only cookie.
    let cookie = response.set_cookie.expect("No Set-Cookie header");
    assert!(cookie.starts_with("refresh_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(
        response.body["data"].get("refresh_token").is_none(),
        "Refresh token must not appear in the response body"
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_wrong_password_and_unknown_email_look_identical() {
    let app = TestApp::new().await;
    app.create_test_user("uniform@test.com", "Password123", "member")
        .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "uniform@test.com",
                "password": "WrongPassword1",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.com",
                "password": "Password123",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password.body["message"], "Invalid email or password",
        "Failure message must not distinguish wrong password from unknown email"
    );
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_inactive_account() {
    let app = TestApp::new().await;
    let id = app
        .create_test_user("inactive@test.com", "Password123", "member")
        .await;
    app.deactivate_user(id).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "inactive@test.com",
                "password": "Password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Account is inactive");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_email_lookup_is_case_insensitive() {
    let app = TestApp::new().await;
    app.create_test_user("Mixed.Case@Test.com", "Password123", "member")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "mixed.case@test.com",
                "password": "Password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("garbage-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_deactivation_invalidates_live_token() {
    let app = TestApp::new().await;
    let id = app
        .create_test_user("revoked@test.com", "Password123", "member")
        .await;
    let token = app.login("revoked@test.com", "Password123").await;

    // Token works while the account is active.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    // Deactivation refuses the same, still-unexpired token.
    app.deactivate_user(id).await;
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_refresh_returns_current_role() {
    let app = TestApp::new().await;
    app.create_test_user("roleadmin@test.com", "Password123", "admin")
        .await;
    let user_id = app
        .create_test_user("promote@test.com", "Password123", "member")
        .await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "promote@test.com",
                "password": "Password123",
            })),
            None,
        )
        .await;
    let cookie = helpers::refresh_cookie_pair(&login.set_cookie.expect("No Set-Cookie"));

    // Change the role behind the refresh token's back.
    let admin_token = app.login("roleadmin@test.com", "Password123").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}/role"),
            Some(serde_json::json!({ "role": "chef" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The refreshed access token must carry the current role, not the
    // role at issuance time.
    let refreshed = app
        .request_with_cookie("POST", "/api/auth/refresh", &cookie)
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);

    let new_token = refreshed.body["data"]["access_token"].as_str().unwrap();
    let me = app
        .request("GET", "/api/auth/me", None, Some(new_token))
        .await;
    assert_eq!(me.body["data"]["role"], "chef");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_refresh_without_cookie_rejected() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/refresh", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_refresh_rejected_for_deactivated_account() {
    let app = TestApp::new().await;
    let id = app
        .create_test_user("refreshgone@test.com", "Password123", "member")
        .await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "refreshgone@test.com",
                "password": "Password123",
            })),
            None,
        )
        .await;
    let cookie = helpers::refresh_cookie_pair(&login.set_cookie.expect("No Set-Cookie"));

    app.deactivate_user(id).await;

    let refreshed = app
        .request_with_cookie("POST", "/api/auth/refresh", &cookie)
        .await;
    assert_eq!(refreshed.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_requires_admin() {
    let app = TestApp::new().await;
    app.create_test_user("plain@test.com", "Password123", "member")
        .await;
    let token = app.login("plain@test.com", "Password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "New User",
                "email": "new@test.com",
                "password": "Password123",
                "role": "member",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.create_test_user("admin@test.com", "Password123", "admin")
        .await;
    app.create_test_user("taken@test.com", "Password123", "member")
        .await;
    let token = app.login("admin@test.com", "Password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Dup",
                "email": "taken@test.com",
                "password": "Password123",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_end_to_end_register_login_deactivate() {
    let app = TestApp::new().await;
    app.create_test_user("boss@test.com", "Password123", "admin")
        .await;
    let admin_token = app.login("boss@test.com", "Password123").await;

    // Register a member account.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "AB",
                "email": "a@b.com",
                "password": "Password123",
                "role": "member",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let new_id = response.body["data"]["user"]["id"].as_str().unwrap();
    let new_id: uuid::Uuid = new_id.parse().unwrap();

    // Login with the correct password returns an access token and the
    // member role.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "a@b.com",
                "password": "Password123",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["data"]["user"]["role"], "member");
    let member_token = login.body["data"]["access_token"].as_str().unwrap().to_string();

    // Wrong password fails with the uniform message.
    let bad = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "a@b.com",
                "password": "WrongPassword1",
            })),
            None,
        )
        .await;
    assert_eq!(bad.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad.body["message"], "Invalid email or password");

    // Deactivate, then the old token is refused.
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{new_id}/active"),
            Some(serde_json::json!({ "is_active": false })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let me = app
        .request("GET", "/api/auth/me", None, Some(&member_token))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_change_password() {
    let app = TestApp::new().await;
    app.create_test_user("pw@test.com", "Password123", "member")
        .await;
    let token = app.login("pw@test.com", "Password123").await;

    // Wrong current password is refused.
    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "current_password": "NotTheOne1",
                "new_password": "NewPassword1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Correct current password succeeds, and the new credential works.
    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "current_password": "Password123",
                "new_password": "NewPassword1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let _ = app.login("pw@test.com", "NewPassword1").await;
}

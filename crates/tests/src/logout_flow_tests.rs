use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use portal::routes::access::{navigate, Navigation};
use portal::Route;
use serde_json::json;
use shared_types::{
    apply_login, apply_logout, AuthCallError, LoginRequest, PortalError, Session, UserRole,
};

use crate::common;

fn signed_in_student() -> Session {
    Session::signed_in("Ada Lovelace", UserRole::Student).with_dob("1815-12-10")
}

#[tokio::test]
async fn test_confirmed_logout_clears_session_and_returns_flashes() {
    let router = Router::new().route(
        "/api/auth/logout",
        get(|| async { Json(json!({ "flashes": "You have been logged out" })) }),
    );
    let base = common::spawn_auth_service(router).await;

    let mut session = signed_in_student();
    let outcome = common::client_for(&base).logout().await;
    let flashes = apply_logout(&mut session, outcome).unwrap();

    assert_eq!(flashes, vec!["You have been logged out".to_string()]);
    assert_eq!(session, Session::anonymous());
    assert_eq!(navigate(&Route::Login {}, &session), Navigation::Render);
    assert_eq!(
        navigate(&Route::StudentDashboard {}, &session),
        Navigation::Login
    );
}

#[tokio::test]
async fn test_server_error_keeps_session() {
    let router = Router::new().route(
        "/api/auth/logout",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "errors": ["Session store unavailable"] })),
            )
        }),
    );
    let base = common::spawn_auth_service(router).await;

    let mut session = signed_in_student();
    let outcome = common::client_for(&base).logout().await;
    let err = apply_logout(&mut session, outcome).unwrap_err();

    assert_eq!(
        err,
        PortalError::Logout(AuthCallError::Rejected {
            status: 500,
            message: "Session store unavailable".into(),
        })
    );
    assert_eq!(session, signed_in_student());
    assert_eq!(
        navigate(&Route::StudentDashboard {}, &session),
        Navigation::Render
    );
}

#[tokio::test]
async fn test_unreachable_service_keeps_session() {
    let base = common::unreachable_base_url().await;

    let mut session = signed_in_student();
    let outcome = common::client_for(&base).logout().await;
    let err = apply_logout(&mut session, outcome).unwrap_err();

    assert!(matches!(err, PortalError::Logout(AuthCallError::Network(_))));
    assert_eq!(
        err.friendly_message(),
        "Could not reach the server to sign you out. Please try again."
    );
    assert_eq!(session, signed_in_student());
}

#[tokio::test]
async fn test_non_json_success_is_malformed() {
    let router = Router::new().route("/api/auth/logout", get(|| async { "<html>ok</html>" }));
    let base = common::spawn_auth_service(router).await;

    let mut session = signed_in_student();
    let outcome = common::client_for(&base).logout().await;
    let err = apply_logout(&mut session, outcome).unwrap_err();

    assert!(matches!(err, PortalError::Logout(AuthCallError::Malformed(_))));
    assert_eq!(session, signed_in_student());
}

/// Auth service that only honours logout for the cookie it issued at login.
fn cookie_session_router() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|| async {
                (
                    [(SET_COOKIE, "portal_session=3c1f9a; Path=/; HttpOnly")],
                    Json(json!({
                        "user_info": {
                            "userName": "Ada Lovelace",
                            "userType": "student",
                            "loggedIn": true
                        }
                    })),
                )
            }),
        )
        .route(
            "/api/auth/logout",
            get(|headers: HeaderMap| async move {
                let has_session = headers
                    .get_all(COOKIE)
                    .iter()
                    .filter_map(|v| v.to_str().ok())
                    .any(|v| v.contains("portal_session=3c1f9a"));
                if has_session {
                    (StatusCode::OK, Json(json!({ "flashes": "You have been logged out" })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "errors": "Unauthorized" })))
                }
            }),
        )
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ada@school.example".into(),
        password: "analytical engine".into(),
        remember_me: false,
    }
}

#[tokio::test]
async fn test_shared_client_carries_login_cookie_to_logout() {
    let base = common::spawn_auth_service(cookie_session_router()).await;
    let client = common::client_for(&base);

    let mut session = Session::anonymous();
    let outcome = client.login(&credentials()).await;
    apply_login(&mut session, outcome).unwrap();
    assert!(session.logged_in);

    // The app hands out clones of the one client it provides at the root.
    let widget_client = client.clone();
    let outcome = widget_client.logout().await;
    let flashes = apply_logout(&mut session, outcome).unwrap();

    assert_eq!(flashes, vec!["You have been logged out".to_string()]);
    assert_eq!(session, Session::anonymous());
}

#[tokio::test]
async fn test_logout_without_login_cookie_is_rejected() {
    let base = common::spawn_auth_service(cookie_session_router()).await;

    let mut session = signed_in_student();
    let outcome = common::client_for(&base).logout().await;
    let err = apply_logout(&mut session, outcome).unwrap_err();

    assert_eq!(
        err,
        PortalError::Logout(AuthCallError::Rejected {
            status: 401,
            message: "Unauthorized".into(),
        })
    );
    assert_eq!(session, signed_in_student());
}

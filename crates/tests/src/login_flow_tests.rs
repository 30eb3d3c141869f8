use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use portal::routes::access::{navigate, Navigation};
use portal::Route;
use serde_json::{json, Value};
use shared_types::routing::resolve_dashboard;
use shared_types::{apply_login, AuthCallError, LoginRequest, PortalError, Session, UserRole};

use crate::common;

async fn login_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let known = body["email"] == "hopper@school.example" && body["password"] == "correct horse";
    if !known {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "errors": "Invalid email or password" })),
        );
    }
    let flash = if body["remember_me"] == true {
        "Welcome back! You will stay signed in."
    } else {
        "Welcome back!"
    };
    (
        StatusCode::OK,
        Json(json!({
            "flashes": [flash],
            "user_info": {
                "userName": "Grace Hopper",
                "userType": "Teacher",
                "loggedIn": true,
                "dob": "1906-12-09"
            }
        })),
    )
}

fn auth_router() -> Router {
    Router::new().route(
        "/api/auth/login",
        get(|| async { Json(json!({ "user_info": { "loggedIn": false } })) }).post(login_handler),
    )
}

fn request(password: &str, remember_me: bool) -> LoginRequest {
    LoginRequest {
        email: "hopper@school.example".into(),
        password: password.into(),
        remember_me,
    }
}

#[tokio::test]
async fn test_login_commits_session_and_lands_on_role_dashboard() {
    let base = common::spawn_auth_service(auth_router()).await;
    let client = common::client_for(&base);

    let mut session = Session::anonymous();
    let outcome = client.login(&request("correct horse", true)).await;
    let flashes = apply_login(&mut session, outcome).unwrap();

    assert_eq!(flashes, vec!["Welcome back! You will stay signed in.".to_string()]);
    assert_eq!(session.role(), Ok(UserRole::Teacher));
    assert_eq!(session.dob(), Some("1906-12-09"));

    let target = Route::from_path(&resolve_dashboard(&session));
    assert_eq!(target, Route::TeacherDashboard {});
    assert_eq!(navigate(&target, &session), Navigation::Render);
}

#[tokio::test]
async fn test_rejected_login_keeps_anonymous_session() {
    let base = common::spawn_auth_service(auth_router()).await;
    let client = common::client_for(&base);

    let mut session = Session::anonymous();
    let outcome = client.login(&request("wrong", false)).await;
    let err = apply_login(&mut session, outcome).unwrap_err();

    assert_eq!(
        err,
        PortalError::Login(AuthCallError::Rejected {
            status: 401,
            message: "Invalid email or password".into(),
        })
    );
    assert_eq!(err.friendly_message(), "Invalid email or password");
    assert_eq!(session, Session::anonymous());
}

#[tokio::test]
async fn test_current_session_reports_anonymous_visitor() {
    let base = common::spawn_auth_service(auth_router()).await;
    let client = common::client_for(&base);

    let response = client.current_session().await.unwrap();
    let user = response.user_info.unwrap();
    assert!(!user.logged_in);
    assert_eq!(user.active_role(), None);
}

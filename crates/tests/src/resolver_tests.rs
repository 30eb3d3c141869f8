use pretty_assertions::assert_eq;
use portal::Route;
use shared_types::routing::{dashboard_path, resolve_dashboard, LOGIN_PATH};
use shared_types::{PortalError, Session, UserRole, ALL_ROLES};

#[test]
fn test_resolver_path_for_every_role() {
    let expected = [
        (UserRole::Admin, "/admin/dashboard"),
        (UserRole::Teacher, "/teacher/dashboard"),
        (UserRole::Student, "/student/dashboard"),
        (UserRole::Parent, "/parent/dashboard"),
    ];
    for (role, path) in expected {
        let session = Session::signed_in("Test User", role);
        assert_eq!(dashboard_path(&session).unwrap(), path);
    }
}

#[test]
fn test_resolver_paths_are_routable() {
    for role in ALL_ROLES {
        let session = Session::signed_in("Test User", *role);
        let path = resolve_dashboard(&session);
        assert_eq!(Route::from_path(&path), Route::dashboard_for(*role));
    }
}

#[test]
fn test_logged_out_resolves_to_login() {
    let session = Session {
        user_type: "student".into(),
        ..Session::anonymous()
    };
    assert_eq!(dashboard_path(&session).unwrap(), LOGIN_PATH);
    assert_eq!(Route::from_path(LOGIN_PATH), Route::Login {});
}

#[test]
fn test_unknown_role_is_an_error_but_recovers_to_login() {
    let session = Session {
        user_name: "Eve".into(),
        user_type: "janitor".into(),
        logged_in: true,
        dob: None,
    };
    assert_eq!(
        dashboard_path(&session),
        Err(PortalError::UnknownRole("janitor".into()))
    );
    assert_eq!(resolve_dashboard(&session), LOGIN_PATH);
}

#[test]
fn test_resolver_is_idempotent() {
    let session = Session::signed_in("Ada", UserRole::Teacher);
    assert_eq!(resolve_dashboard(&session), resolve_dashboard(&session));
}

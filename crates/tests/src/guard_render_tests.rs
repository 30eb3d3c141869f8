use shared_types::{Session, UserRole};

use crate::common::render_route;

fn student() -> Session {
    Session::signed_in("Ada Lovelace", UserRole::Student)
}

#[test]
fn test_guard_waits_for_session_check() {
    let html = render_route("/student/dashboard", student(), false);
    assert!(html.contains("Loading..."));
    assert!(!html.contains("STUDENT DASHBOARD"));
    assert!(!html.contains("Sign in to continue"));
}

#[test]
fn test_guard_renders_role_page_for_matching_role() {
    let html = render_route("/student/dashboard", student(), true);
    assert!(html.contains("STUDENT DASHBOARD"));
    assert!(html.contains("Ada Lovelace"));
    assert!(!html.contains("Loading..."));
}

#[test]
fn test_guard_shows_login_in_place_when_signed_out() {
    let html = render_route("/student/dashboard", Session::anonymous(), true);
    assert!(html.contains("Sign in to continue"));
    assert!(!html.contains("STUDENT DASHBOARD"));
}

#[test]
fn test_guard_shows_interstitial_on_role_mismatch() {
    let teacher = Session::signed_in("Grace Hopper", UserRole::Teacher);
    let html = render_route("/student/dashboard", teacher, true);
    assert!(html.contains("Redirecting..."));
    assert!(!html.contains("STUDENT DASHBOARD"));
    assert!(!html.contains("TEACHER DASHBOARD"));
}

#[test]
fn test_generic_dashboard_does_not_render_protected_content() {
    let html = render_route("/dashboard", student(), true);
    assert!(html.contains("Redirecting..."));
    assert!(!html.contains("STUDENT DASHBOARD"));
}

#[test]
fn test_unmatched_path_renders_not_found_message() {
    let html = render_route("/library/books", Session::anonymous(), true);
    assert!(html.contains("404"));
    assert!(html.contains("The page /library/books could not be found."));
}

#[test]
fn test_login_route_ignores_hydration() {
    let html = render_route("/", Session::anonymous(), false);
    assert!(html.contains("Sign in to continue"));
    assert!(!html.contains("Loading..."));
}

#[test]
fn test_student_content_routes_render_their_pages() {
    let timetable = render_route("/student/timetable", student(), true);
    assert!(timetable.contains("This week"));
    assert!(timetable.contains("Friday"));

    let assignments = render_route("/student/assignments", student(), true);
    assert!(assignments.contains("Work set for your classes"));

    let detail = render_route("/student/assignment?id=9b7d0e13", student(), true);
    assert!(detail.contains("Persuasive essay draft"));
}

#[test]
fn test_profile_route_renders_profile_page() {
    let teacher = Session::signed_in("Grace Hopper", UserRole::Teacher);
    let html = render_route("/teacher/profile", teacher, true);
    assert!(html.contains("Your account details"));
    assert!(html.contains("Not provided"));
}

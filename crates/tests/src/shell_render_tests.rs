use dioxus::prelude::*;
use portal::components::DashboardShell;
use portal::routes::dashboard::admin::AdminDashboardPage;
use portal::routes::dashboard::parent::ParentDashboardPage;
use portal::routes::profile::ProfilePage;
use shared_types::{Session, UserRole};

use crate::common::render_with_session;

fn student_shell() -> Element {
    rsx! {
        DashboardShell {
            role: UserRole::Student,
            user_name: "Ada Lovelace",
            user_type: "student",
            logged_in: true,
            dob: "1815-12-10",
            p { "role content" }
        }
    }
}

fn signed_out_shell() -> Element {
    rsx! {
        DashboardShell {
            role: UserRole::Teacher,
            user_name: "Grace Hopper",
            user_type: "teacher",
            logged_in: false,
        }
    }
}

#[test]
fn test_shell_shows_props_unchanged() {
    let html = render_with_session(Session::anonymous(), student_shell);
    assert!(html.contains("STUDENT DASHBOARD"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Born 1815-12-10"));
    assert!(html.contains("role content"));
    assert!(html.contains("Sign Out"));
}

#[test]
fn test_shell_hides_logout_when_not_logged_in() {
    let html = render_with_session(Session::anonymous(), signed_out_shell);
    assert!(html.contains("TEACHER DASHBOARD"));
    assert!(!html.contains("Sign Out"));
    assert!(!html.contains("Born"));
}

#[test]
fn test_admin_dashboard_reads_session() {
    let session = Session::signed_in("Alan Turing", UserRole::Admin);
    let html = render_with_session(session, AdminDashboardPage);
    assert!(html.contains("ADMIN DASHBOARD"));
    assert!(html.contains("Alan Turing"));
    assert!(html.contains(r#"data-role="admin""#));
}

#[test]
fn test_parent_dashboard_reads_session() {
    let session = Session::signed_in("Mary Somerville", UserRole::Parent).with_dob("1780-12-26");
    let html = render_with_session(session, ParentDashboardPage);
    assert!(html.contains("PARENT DASHBOARD"));
    assert!(html.contains("Mary Somerville"));
    assert!(html.contains("Born 1780-12-26"));
}

#[test]
fn test_profile_page_without_dob() {
    let session = Session::signed_in("Alan Turing", UserRole::Teacher);
    let html = render_with_session(session, ProfilePage);
    assert!(html.contains("Alan Turing"));
    assert!(html.contains("Teacher"));
    assert!(html.contains("Not provided"));
    assert!(!html.contains("Born"));
}

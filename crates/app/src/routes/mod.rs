pub mod access;
pub mod assignments;
pub mod dashboard;
pub mod login;
pub mod nav;
pub mod not_found;
pub mod profile;
pub mod timetable;

use crate::config::portal_config;
use crate::session::use_session;
use access::{navigate, Navigation};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdCalendar, LdLayoutDashboard, LdUserCheck};
use dioxus_free_icons::Icon;
use nav::{nav_links, NavIcon};
use shared_ui::{
    Badge, BadgeVariant, Sidebar, SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset,
    SidebarMenuItem, SidebarProvider, SidebarTrigger,
};

use dashboard::{Dashboard, Profile};
use login::{Login, Logout};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/auth/logout")]
    Logout {},
    #[layout(SessionGuard)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[layout(PortalLayout)]
    // ── Student ──
    #[route("/student/dashboard")]
    StudentDashboard {},
    #[route("/student/timetable")]
    StudentTimetable {},
    #[route("/student/assignments")]
    StudentAssignments {},
    #[route("/student/assignment?:id")]
    StudentAssignment { id: Option<String> },
    #[route("/student/profile")]
    StudentProfile {},
    // ── Teacher ──
    #[route("/teacher/dashboard")]
    TeacherDashboard {},
    #[route("/teacher/assignments")]
    TeacherAssignments {},
    #[route("/teacher/profile")]
    TeacherProfile {},
    // ── Admin ──
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/profile")]
    AdminProfile {},
    // ── Parent ──
    #[route("/parent/dashboard")]
    ParentDashboard {},
    #[route("/parent/profile")]
    ParentProfile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Applies [`navigate`] to every route beneath it.
///
/// Waits for the startup session check before deciding, so a reload on a
/// role page does not bounce through the login view.
#[component]
fn SessionGuard() -> Element {
    let state = use_session();
    let route: Route = use_route();

    if !(state.hydrated)() {
        return rsx! {
            div { class: "session-guard-loading",
                p { "Loading..." }
            }
        };
    }

    let session = state.session.read().clone();
    match navigate(&route, &session) {
        Navigation::Render => rsx! { Outlet::<Route> {} },
        Navigation::Login => rsx! { login::LoginPage {} },
        Navigation::Redirect(target) => {
            tracing::debug!(from = %route, to = %target, "redirecting");
            navigator().replace(target);
            rsx! {
                div { class: "session-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        Navigation::NotFound => rsx! {
            NotFound { segments: Vec::<String>::new() }
        },
    }
}

/// Sidebar + top bar around every role-scoped page.
#[component]
fn PortalLayout() -> Element {
    let route: Route = use_route();
    let state = use_session();
    let session = state.session.read().clone();
    let brand = portal_config().ui.brand.clone();

    // The guard only lets matching roles through, so this is always Some here.
    let Some(role) = session.active_role() else {
        return rsx! { Outlet::<Route> {} };
    };
    let links = nav_links(role);
    let page_title = route.title();
    let role_name = role.display_name();

    rsx! {
        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    span { class: "sidebar-brand-name", "{brand}" }
                }
                SidebarGroup { label: role_name.to_string(),
                    for link in links {
                        SidebarMenuItem { key: "{link.label}", active: link.is_active(&route),
                            Link { to: link.route.clone(),
                                {nav_icon(link.icon)}
                                span { "{link.label}" }
                            }
                        }
                    }
                }
                SidebarFooter {
                    Badge { variant: BadgeVariant::Secondary, "{role_name}" }
                }
            }
            SidebarInset {
                header { class: "navbar-bar",
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "navbar-title", "{page_title}" }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        NavIcon::Timetable => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
        },
        NavIcon::Assignments => rsx! {
            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
        },
        NavIcon::Profile => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
    }
}

// Role route components

#[component]
fn StudentDashboard() -> Element {
    rsx! { dashboard::student::StudentDashboardPage {} }
}

#[component]
fn StudentTimetable() -> Element {
    rsx! { timetable::TimetablePage {} }
}

#[component]
fn StudentAssignments() -> Element {
    rsx! { assignments::StudentAssignmentsPage {} }
}

#[component]
fn StudentAssignment(id: Option<String>) -> Element {
    rsx! { assignments::AssignmentDetailPage { id: id } }
}

#[component]
fn StudentProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}

#[component]
fn TeacherDashboard() -> Element {
    rsx! { dashboard::teacher::TeacherDashboardPage {} }
}

#[component]
fn TeacherAssignments() -> Element {
    rsx! { assignments::TeacherAssignmentsPage {} }
}

#[component]
fn TeacherProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}

#[component]
fn AdminDashboard() -> Element {
    rsx! { dashboard::admin::AdminDashboardPage {} }
}

#[component]
fn AdminProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}

#[component]
fn ParentDashboard() -> Element {
    rsx! { dashboard::parent::ParentDashboardPage {} }
}

#[component]
fn ParentProfile() -> Element {
    rsx! { profile::ProfilePage {} }
}

use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader};

use crate::components::ProfileWidget;
use crate::session::use_session;

/// `/{role}/profile`: account details with the profile widget alongside.
#[component]
pub fn ProfilePage() -> Element {
    let session = use_session().snapshot();
    let role_name = session.role().map(|r| r.display_name()).unwrap_or("Unknown");
    let dob = session.dob().unwrap_or("Not provided").to_string();

    rsx! {
        PageHeader { title: "Profile", subtitle: "Your account details" }
        div { class: "profile-page",
            Card {
                CardHeader {
                    CardTitle { "Account" }
                }
                CardContent {
                    dl { class: "profile-details",
                        dt { "Name" }
                        dd { "{session.user_name}" }
                        dt { "Role" }
                        dd { "{role_name}" }
                        dt { "Date of birth" }
                        dd { "{dob}" }
                    }
                }
            }
            ProfileWidget {
                user_name: session.user_name.clone(),
                user_type: session.user_type.clone(),
                logged_in: session.logged_in,
                dob: session.dob().map(str::to_string),
            }
        }
    }
}

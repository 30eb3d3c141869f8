use crate::api::use_auth_client;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::routing::resolve_dashboard;
use shared_types::LoginRequest;
use shared_ui::{Alert, AlertVariant, Card, CardContent, CardHeader, CardTitle};

/// `/`.
#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

/// `/auth/logout`. The widget has already signed out by the time this renders;
/// it shows the login view with the logout flashes.
#[component]
pub fn Logout() -> Element {
    rsx! { LoginPage {} }
}

/// Sign-in form plus the flash messages left by the last auth call.
///
/// Also rendered in place of guarded routes for visitors without a session.
#[component]
pub fn LoginPage() -> Element {
    let mut state = use_session();
    let client = use_auth_client();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let session = state.snapshot();
    let brand = crate::config::portal_config().ui.brand.clone();
    let flashes = state.flashes.read().clone();

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
                remember_me: remember_me(),
            };
            let outcome = client.login(&request).await;
            match state.complete_login(outcome) {
                Ok(()) => {
                    password.set(String::new());
                    let target = resolve_dashboard(&state.snapshot());
                    navigator().replace(Route::from_path(&target));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign in failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{brand}" }
                    p { class: "auth-subtitle", "Sign in to continue" }
                }

                CardContent {
                    for (i, flash) in flashes.into_iter().enumerate() {
                        Alert {
                            key: "{i}-{flash}",
                            variant: AlertVariant::Info,
                            on_dismiss: move |_| state.dismiss_flash(i),
                            "{flash}"
                        }
                    }

                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, "{err}" }
                    }

                    if session.logged_in {
                        div { class: "auth-continue",
                            p { "Signed in as {session.user_name}." }
                            Link { to: Route::Dashboard {}, class: "button", "Continue to dashboard" }
                        }
                    } else {
                        form { onsubmit: handle_login,
                            label { class: "auth-field",
                                span { "Email" }
                                input {
                                    r#type: "email",
                                    id: "email",
                                    autocomplete: "username",
                                    placeholder: "you@school.example",
                                    value: email(),
                                    oninput: move |e: FormEvent| email.set(e.value()),
                                }
                            }
                            label { class: "auth-field",
                                span { "Password" }
                                input {
                                    r#type: "password",
                                    id: "password",
                                    autocomplete: "current-password",
                                    value: password(),
                                    oninput: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            label { class: "auth-remember",
                                input {
                                    r#type: "checkbox",
                                    checked: remember_me(),
                                    onchange: move |_| remember_me.toggle(),
                                }
                                "Remember me"
                            }
                            button {
                                r#type: "submit",
                                class: "auth-submit button",
                                disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }
            }
        }
    }
}

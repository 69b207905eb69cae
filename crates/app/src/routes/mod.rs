pub mod admin;
pub mod booking;
pub mod doctor;
pub mod error_page;
pub mod home;
pub mod login;
pub mod status;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHeartPulse;
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Footer, Navbar, NavbarBrand, NavbarLinks};

use crate::session::{self, guard_outcome, use_session, GuardOutcome};
use crate::use_api;

use admin::dashboard::AdminDashboard;
use booking::Booking;
use doctor::dashboard::DoctorDashboard;
use error_page::ErrorPage;
use home::Home;
use login::Login;
use status::Status;

/// Application routes. The shell (navbar + footer) wraps every page;
/// dashboards sit behind their role guard.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/appointment")]
    Booking {},
    #[route("/status")]
    Status {},
    #[route("/error")]
    ErrorPage {},
    #[layout(AdminGuard)]
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[end_layout]
    #[layout(DoctorGuard)]
    #[route("/doctor/dashboard")]
    DoctorDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page for a freshly signed-in role.
    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::Doctor => Route::DoctorDashboard {},
        }
    }
}

/// Persistent shell: navigation bar and footer around the active page.
#[component]
fn Shell() -> Element {
    let mut session = use_session();
    let role = session.current_role();
    let greeting = session
        .current
        .read()
        .as_ref()
        .and_then(|s| s.display_name.clone());

    rsx! {
        Navbar {
            NavbarBrand {
                Link { to: Route::Home {},
                    span { class: "brand-row",
                        Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 20, height: 20 }
                        h1 { class: "brand-name", "Sunrise" }
                        span { class: "brand-sub", "Healthcare" }
                    }
                }
            }
            NavbarLinks {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Booking {}, "Book Appointment" }
                Link { to: Route::Status {}, "My Status" }
                if let Some(role) = role {
                    Link { to: Route::dashboard_for(role), "Dashboard" }
                    if let Some(name) = greeting {
                        span { class: "navbar-greeting", "{name}" }
                    }
                    button {
                        class: "navbar-logout",
                        onclick: move |_| {
                            session.sign_out();
                            navigator().push(Route::Login {});
                        },
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, "Staff Login" }
                }
            }
        }

        main { class: "page-content",
            Outlet::<Route> {}
        }

        Footer {
            span { "Sunrise Healthcare — appointments and patient records in one place." }
        }
    }
}

#[component]
fn AdminGuard() -> Element {
    rsx! { RoleGuard { required: Role::Admin } }
}

#[component]
fn DoctorGuard() -> Element {
    rsx! { RoleGuard { required: Role::Doctor } }
}

/// Shared route guard. Reads the role-scoped token and asks the backend
/// who it belongs to; the backend's answer is the only role check. The
/// outlet (and with it every protected fetch) renders only on `Allow`.
#[component]
fn RoleGuard(required: Role) -> Element {
    let mut session = use_session();
    let api = use_api();

    let check = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(token) = session::stored_token(required) else {
                return (false, None);
            };
            match api.session_role(&token).await {
                Ok(user) => (true, Some((token, user))),
                Err(e) => {
                    if e.is_rejection() {
                        // The backend refused the token; drop it so the
                        // next visit goes straight to login.
                        session::clear_token(required);
                    }
                    tracing::warn!(error = %e, "session verification failed");
                    (true, None)
                }
            }
        }
    });

    let state = check.read().clone();

    match state {
        None => rsx! {
            div { class: "guard-loading",
                p { "Checking your session..." }
            }
        },
        Some((token_present, verified)) => {
            let verified_role = verified.as_ref().map(|(_, user)| user.role);
            match guard_outcome(required, token_present, verified_role) {
                GuardOutcome::Allow => {
                    if session.current_role() != Some(required) {
                        if let Some((token, _)) = verified {
                            session.sign_in(required, &token);
                        }
                    }
                    rsx! { Outlet::<Route> {} }
                }
                GuardOutcome::RedirectLogin => {
                    navigator().push(Route::Login {});
                    rsx! {
                        div { class: "guard-loading",
                            p { "Redirecting to login..." }
                        }
                    }
                }
                GuardOutcome::RedirectError => {
                    navigator().push(Route::ErrorPage {});
                    rsx! {
                        div { class: "guard-loading",
                            p { "Redirecting..." }
                        }
                    }
                }
            }
        }
    }
}

/// Catch-all for unmatched URLs.
#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        section { class: "error-page",
            p { class: "muted", "No page at " code { "{path}" } "." }
            ErrorPage {}
        }
    }
}

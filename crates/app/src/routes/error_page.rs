use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::routes::Route;

/// Generic dead-end page: wrong-role dashboard visits and unknown URLs
/// both land here.
#[component]
pub fn ErrorPage() -> Element {
    rsx! {
        section { class: "error-page",
            Card {
                CardHeader {
                    CardTitle { "This page isn't available" }
                }
                CardContent {
                    p {
                        "The page you asked for doesn't exist, or your account "
                        "doesn't have access to it."
                    }
                    div { class: "error-actions",
                        Button {
                            onclick: move |_| { navigator().push(Route::Home {}); },
                            "Back to Home"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| { navigator().push(Route::Login {}); },
                            "Staff Login"
                        }
                    }
                }
            }
        }
    }
}

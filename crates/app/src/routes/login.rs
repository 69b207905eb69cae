use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormSelect,
    Input, ToastOptions,
};

use crate::routes::Route;
use crate::session::use_session;
use crate::use_api;

/// Staff sign-in. One form for both roles; the role picker decides which
/// credential namespace the backend checks and where we land afterward.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let toast = use_toast();

    let mut role_choice = use_signal(|| "admin".to_string());
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let req = LoginRequest {
            user_id: user_id.read().trim().to_string(),
            password: password.read().clone(),
            role: role_choice.read().clone(),
        };
        if req.user_id.is_empty() || req.password.is_empty() {
            toast.error("Enter your ID and password".to_string(), ToastOptions::new());
            return;
        }
        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            match api.login(&req).await {
                Ok(resp) => {
                    // Trust the role the backend put in the response, not
                    // the picker.
                    session.sign_in(resp.role, &resp.token);
                    navigator().push(Route::dashboard_for(resp.role));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login rejected");
                    toast.error("Invalid credentials".to_string(), ToastOptions::new());
                    // Field values stay put so the visitor can correct a
                    // typo instead of retyping everything.
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        section { class: "login-page",
            Card {
                CardHeader {
                    CardTitle { "Staff Login" }
                    CardDescription { "Administrators and doctors sign in here." }
                }
                CardContent {
                    Form {
                        onsubmit: handle_submit,
                        FormSelect {
                            label: "Sign in as",
                            value: role_choice.read().clone(),
                            onchange: move |evt: FormEvent| role_choice.set(evt.value()),
                            option { value: "admin", "Administrator" }
                            option { value: "doctor", "Doctor" }
                        }
                        Input {
                            label: "User ID",
                            value: user_id.read().clone(),
                            placeholder: "Your staff ID",
                            on_input: move |evt: FormEvent| user_id.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password.read().clone(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            disabled: *in_flight.read(),
                            if *in_flight.read() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}

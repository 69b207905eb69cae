use dioxus::prelude::*;
use shared_types::Appointment;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, DetailItem, DetailList, Form, Input, Separator, ToastOptions,
};

use crate::format_helpers::{diagnosis_display, format_date_uk};
use crate::use_api;

/// Which stage of the check-my-status flow the visitor is on.
#[derive(Debug, Clone, PartialEq)]
enum Stage {
    EnterEmail,
    EnterCode,
    Results(Vec<Appointment>),
}

/// Patient status lookup. Identity is a one-time passcode sent to the
/// booking email; only a verified email ever sees its appointments.
#[component]
pub fn Status() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut stage = use_signal(|| Stage::EnterEmail);
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let send_code = {
        let api = api.clone();
        move |_: FormEvent| {
            if *in_flight.read() {
                return;
            }
            let address = email.read().trim().to_string();
            if address.is_empty() {
                toast.error("Enter your email first".to_string(), ToastOptions::new());
                return;
            }
            let api = api.clone();
            spawn(async move {
                in_flight.set(true);
                match api.send_otp(&address).await {
                    Ok(()) => {
                        toast.success(
                            "We emailed you a verification code".to_string(),
                            ToastOptions::new(),
                        );
                        stage.set(Stage::EnterCode);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "otp send failed");
                        toast.error(
                            "Could not send the code. Check the address and try again.".to_string(),
                            ToastOptions::new(),
                        );
                    }
                }
                in_flight.set(false);
            });
        }
    };

    let verify_code = {
        let api = api.clone();
        move |_: FormEvent| {
            if *in_flight.read() {
                return;
            }
            let address = email.read().trim().to_string();
            let entered = code.read().trim().to_string();
            if entered.is_empty() {
                toast.error("Enter the code from your email".to_string(), ToastOptions::new());
                return;
            }
            let api = api.clone();
            spawn(async move {
                in_flight.set(true);
                match api.verify_otp(&address, &entered).await {
                    Ok(()) => match api.appointments_for(&address).await {
                        Ok(list) => stage.set(Stage::Results(list)),
                        Err(e) => {
                            tracing::warn!(error = %e, "status fetch failed");
                            toast.error(
                                "Verified, but we could not load your appointments.".to_string(),
                                ToastOptions::new(),
                            );
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "otp rejected");
                        toast.error("That code is not valid".to_string(), ToastOptions::new());
                    }
                }
                in_flight.set(false);
            });
        }
    };

    let start_over = move |_| {
        stage.set(Stage::EnterEmail);
        code.set(String::new());
    };

    rsx! {
        section { class: "status-page",
            match stage.read().clone() {
                Stage::EnterEmail => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Check Your Appointments" }
                            CardDescription {
                                "Enter the email you booked with. We will send a one-time "
                                "code to confirm it's you."
                            }
                        }
                        CardContent {
                            Form {
                                onsubmit: send_code,
                                Input {
                                    label: "Email",
                                    input_type: "email",
                                    value: email.read().clone(),
                                    placeholder: "jane@example.com",
                                    on_input: move |evt: FormEvent| email.set(evt.value()),
                                }
                                Button {
                                    disabled: *in_flight.read(),
                                    if *in_flight.read() { "Sending..." } else { "Send Code" }
                                }
                            }
                        }
                    }
                },
                Stage::EnterCode => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Enter Your Code" }
                            CardDescription { "We sent a verification code to {email}." }
                        }
                        CardContent {
                            Form {
                                onsubmit: verify_code,
                                Input {
                                    label: "Verification code",
                                    value: code.read().clone(),
                                    placeholder: "6-digit code",
                                    on_input: move |evt: FormEvent| code.set(evt.value()),
                                }
                                Button {
                                    disabled: *in_flight.read(),
                                    if *in_flight.read() { "Checking..." } else { "Verify" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: start_over,
                                "Use a different email"
                            }
                        }
                    }
                },
                Stage::Results(appointments) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Your Appointments" }
                            CardDescription { "Everything booked under {email}." }
                        }
                        CardContent {
                            if appointments.is_empty() {
                                p { "No appointments found for this email." }
                            }
                            for (idx, appt) in appointments.iter().cloned().enumerate() {
                                if idx > 0 {
                                    Separator {}
                                }
                                DetailList {
                                    DetailItem { label: "Date", value: format_date_uk(&appt.appointment_date) }
                                    DetailItem { label: "Slot", value: appt.slot.clone() }
                                    DetailItem { label: "Reason", value: appt.reasonforappointment.clone() }
                                    DetailItem { label: "Status",
                                        if appt.completed {
                                            Badge { variant: BadgeVariant::Primary, "Completed" }
                                        } else {
                                            Badge { variant: BadgeVariant::Secondary, "Scheduled" }
                                        }
                                    }
                                    if let Some(diagnosis) = appt.diagnosis.as_ref() {
                                        DetailItem { label: "Diagnosis",
                                            pre { class: "diagnosis-text", "{diagnosis_display(diagnosis)}" }
                                        }
                                    }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: start_over,
                                "Check another email"
                            }
                        }
                    }
                },
            }
        }
    }
}

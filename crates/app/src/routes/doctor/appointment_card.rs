use dioxus::prelude::*;
use shared_types::Appointment;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, DetailItem, DetailList, Separator, Textarea, ToastOptions,
};

use crate::format_helpers::{age_today, format_date_uk};
use crate::use_api;

/// One appointment in the doctor's queue.
///
/// The collapsed view shows who and when; View expands into the full
/// record plus the diagnosis panel. The patient's age comes from a
/// lookup that only runs once the card is opened.
#[component]
pub fn AppointmentCard(appointment: Appointment, on_changed: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut expanded = use_signal(|| false);
    let mut diagnosis_draft = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let patient_age = {
        let api = api.clone();
        let name = appointment.patient_name.clone();
        let email = appointment.email.clone();
        use_resource(move || {
            let api = api.clone();
            let name = name.clone();
            let email = email.clone();
            let open = *expanded.read();
            async move {
                if !open {
                    return None;
                }
                match api.search_patients(Some(&name), Some(&email)).await {
                    Ok(matches) => matches
                        .first()
                        .and_then(|p| p.dob.as_deref())
                        .and_then(age_today),
                    Err(e) => {
                        tracing::warn!(error = %e, "patient lookup failed");
                        None
                    }
                }
            }
        })
    };

    let cancel_appointment = {
        let api = api.clone();
        let id = appointment.id.clone();
        move |_| {
            if *in_flight.read() {
                return;
            }
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                in_flight.set(true);
                match api.delete_appointment(&id).await {
                    Ok(()) => {
                        toast.success("Appointment cancelled".to_string(), ToastOptions::new());
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "appointment delete failed");
                        toast.error("Could not cancel".to_string(), ToastOptions::new());
                    }
                }
                in_flight.set(false);
            });
        }
    };

    let send_report = {
        let api = api.clone();
        let id = appointment.id.clone();
        move |_| {
            if *in_flight.read() {
                return;
            }
            // The draft is sent exactly as typed; an empty report is a
            // valid submission.
            let text = diagnosis_draft.read().clone();
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                in_flight.set(true);
                match api.send_diagnosis(&id, &text).await {
                    Ok(()) => {
                        toast.success(
                            "Diagnosis sent successfully".to_string(),
                            ToastOptions::new(),
                        );
                        // Only a delivered report clears the draft.
                        diagnosis_draft.set(String::new());
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "diagnosis send failed");
                        toast.error("Failed to send".to_string(), ToastOptions::new());
                    }
                }
                in_flight.set(false);
            });
        }
    };

    let complete_session = {
        let api = api.clone();
        let id = appointment.id.clone();
        move |_| {
            if *in_flight.read() {
                return;
            }
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                in_flight.set(true);
                match api.complete_appointment(&id).await {
                    Ok(()) => {
                        toast.success("Appointment completed".to_string(), ToastOptions::new());
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "completion failed");
                        toast.error("Error has occurred".to_string(), ToastOptions::new());
                    }
                }
                in_flight.set(false);
            });
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{appointment.patient_name}" }
                div { class: "card-header-meta",
                    Badge { variant: BadgeVariant::Secondary, "{appointment.slot}" }
                    if appointment.completed {
                        Badge { "Completed" }
                    }
                    span { class: "appointment-date", {format_date_uk(&appointment.appointment_date)} }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            let next = !*expanded.read();
                            expanded.set(next);
                        },
                        if *expanded.read() { "Close" } else { "View" }
                    }
                }
            }

            if *expanded.read() {
                CardContent {
                    DetailList {
                        DetailItem { label: "Email", value: appointment.email.clone() }
                        DetailItem { label: "Age",
                            match patient_age.read().clone() {
                                None => rsx! { span { class: "muted", "looking up..." } },
                                Some(Some(age)) => rsx! { span { "{age}" } },
                                Some(None) => rsx! { span { class: "muted", "unknown" } },
                            }
                        }
                        DetailItem { label: "Reason", value: appointment.reasonforappointment.clone() }
                    }

                    Separator {}

                    if appointment.completed {
                        p { class: "muted", "This session is closed." }
                    } else {
                        div { class: "diagnosis-panel",
                            Textarea {
                                label: "Diagnosis",
                                rows: 4,
                                value: diagnosis_draft.read().clone(),
                                placeholder: "Findings and prescription for the patient",
                                on_input: move |evt: FormEvent| diagnosis_draft.set(evt.value()),
                            }
                            div { class: "row-actions",
                                Button {
                                    disabled: *in_flight.read(),
                                    onclick: send_report,
                                    "Send Report"
                                }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    disabled: *in_flight.read(),
                                    onclick: complete_session,
                                    "Session Completed"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    disabled: *in_flight.read(),
                                    onclick: cancel_appointment,
                                    "Cancel Appointment"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::{BookingRequest, APPOINTMENT_SLOTS};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DetailItem, DetailList, Form, FormRow, FormSelect, Input, Textarea, ToastOptions,
};

use crate::format_helpers::format_date_uk;
use crate::use_api;

/// Public booking form. On success the form clears and a confirmation
/// panel echoes the booked visit; on failure the draft stays intact so
/// nothing has to be retyped.
#[component]
pub fn Booking() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut slot = use_signal(|| APPOINTMENT_SLOTS[0].to_string());
    let mut reason = use_signal(String::new);

    let mut in_flight = use_signal(|| false);
    let mut confirmed = use_signal(|| None::<BookingRequest>);

    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let req = BookingRequest {
            patient_name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            slot: slot.read().clone(),
            reasonforappointment: reason.read().trim().to_string(),
            appointment_date: date.read().clone(),
        };
        if !req.is_complete() {
            toast.error(
                "Please fill in every field before booking".to_string(),
                ToastOptions::new(),
            );
            return;
        }
        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            match api.book_appointment(&req).await {
                Ok(()) => {
                    toast.success("Appointment booked".to_string(), ToastOptions::new());
                    confirmed.set(Some(req));
                    name.set(String::new());
                    email.set(String::new());
                    date.set(String::new());
                    slot.set(APPOINTMENT_SLOTS[0].to_string());
                    reason.set(String::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "booking failed");
                    toast.error(
                        "Could not book the appointment. Please try again.".to_string(),
                        ToastOptions::new(),
                    );
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        section { class: "booking-page",
            Card {
                CardHeader {
                    CardTitle { "Book an Appointment" }
                    CardDescription {
                        "Pick a date and a time slot. We will use your email to show "
                        "your appointment status and diagnosis later."
                    }
                }
                CardContent {
                    Form {
                        onsubmit: handle_submit,
                        FormRow {
                            Input {
                                label: "Full name",
                                value: name.read().clone(),
                                placeholder: "Jane Moore",
                                on_input: move |evt: FormEvent| name.set(evt.value()),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: email.read().clone(),
                                placeholder: "jane@example.com",
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        FormRow {
                            Input {
                                label: "Date",
                                input_type: "date",
                                value: date.read().clone(),
                                on_input: move |evt: FormEvent| date.set(evt.value()),
                            }
                            FormSelect {
                                label: "Time slot",
                                value: slot.read().clone(),
                                onchange: move |evt: FormEvent| slot.set(evt.value()),
                                for s in APPOINTMENT_SLOTS {
                                    option { value: "{s}", "{s}" }
                                }
                            }
                        }
                        Textarea {
                            label: "Reason for appointment",
                            rows: 4,
                            value: reason.read().clone(),
                            placeholder: "Describe your symptoms or the reason for the visit",
                            on_input: move |evt: FormEvent| reason.set(evt.value()),
                        }
                        Button {
                            disabled: *in_flight.read(),
                            if *in_flight.read() { "Booking..." } else { "Book Appointment" }
                        }
                    }
                }
            }

            if let Some(booked) = confirmed.read().as_ref() {
                Card {
                    CardHeader {
                        CardTitle { "You're booked" }
                        CardDescription { "A summary of your visit:" }
                    }
                    CardContent {
                        DetailList {
                            DetailItem { label: "Name", value: booked.patient_name.clone() }
                            DetailItem { label: "Email", value: booked.email.clone() }
                            DetailItem { label: "Date", value: format_date_uk(&booked.appointment_date) }
                            DetailItem { label: "Slot", value: booked.slot.clone() }
                            DetailItem { label: "Reason", value: booked.reasonforappointment.clone() }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| confirmed.set(None),
                            "Book another"
                        }
                    }
                }
            }
        }
    }
}

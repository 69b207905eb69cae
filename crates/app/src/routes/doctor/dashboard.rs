use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader, PageTitle, Skeleton};

use super::appointment_card::AppointmentCard;
use crate::use_api;

/// Doctor home: the appointment queue. Every mutation inside a card
/// reports back through `on_changed`, which re-fetches the queue instead
/// of patching it locally.
#[component]
pub fn DoctorDashboard() -> Element {
    let api = use_api();

    let mut appointments = use_resource(move || {
        let api = api.clone();
        async move { api.list_appointments().await }
    });

    rsx! {
        section { class: "doctor-dashboard",
            PageHeader {
                PageTitle { "Appointment Queue" }
            }

            match &*appointments.read() {
                None => rsx! {
                    div { class: "queue",
                        for _ in 0..2 {
                            Skeleton { style: "height: 7rem;" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "load-error", "Could not load the queue: {e}" }
                        }
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Card {
                        CardContent {
                            p { "No appointments in the queue." }
                        }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "queue",
                        for appointment in list.iter().cloned() {
                            AppointmentCard {
                                key: "{appointment.id}",
                                appointment,
                                on_changed: move |_| appointments.restart(),
                            }
                        }
                    }
                },
            }
        }
    }
}

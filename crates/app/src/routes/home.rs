use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    PageHeader, PageTitle, Skeleton,
};

use crate::routes::Route;
use crate::use_api;

/// Public landing page: the clinic's doctors, browsable without any
/// sign-in. Each card links into the booking flow.
#[component]
pub fn Home() -> Element {
    let api = use_api();

    let doctors = use_resource(move || {
        let api = api.clone();
        async move { api.list_doctors().await }
    });

    rsx! {
        section { class: "home-page",
            div { class: "home-hero",
                h2 { "Care that starts with a conversation" }
                p {
                    "Browse our specialists below, then book a visit. "
                    "No account needed — we confirm your identity by email when you check your results."
                }
                Button {
                    onclick: move |_| { navigator().push(Route::Booking {}); },
                    "Book an Appointment"
                }
            }

            PageHeader {
                PageTitle { "Our Doctors" }
            }

            match &*doctors.read() {
                None => rsx! {
                    div { class: "doctor-grid",
                        for _ in 0..3 {
                            Skeleton { style: "height: 9rem;" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "load-error", "Could not load the doctor list: {e}" }
                        }
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Card {
                        CardContent {
                            p { "No doctors are listed right now. Please check back soon." }
                        }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "doctor-grid",
                        for doctor in list.iter().cloned() {
                            Card {
                                CardHeader {
                                    CardTitle { "{doctor.doctor_name}" }
                                    Badge { variant: BadgeVariant::Secondary, "{doctor.specialization}" }
                                }
                                CardContent {
                                    p { class: "doctor-qualification", "{doctor.qualification}" }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: move |_| { navigator().push(Route::Booking {}); },
                                        "Book a visit"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

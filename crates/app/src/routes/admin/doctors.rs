use dioxus::prelude::*;
use shared_types::{ApiError, CreateDoctorRequest, Doctor, UpdateDoctorRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Form, FormRow,
    Input, Skeleton, ToastOptions,
};

use crate::use_api;

/// Doctor roster panel: create form (toggleable), the roster table, and
/// an inline edit form that replaces the table while a row is open.
#[component]
pub fn DoctorsPanel() -> Element {
    let api = use_api();

    let mut doctors = use_resource(move || {
        let api = api.clone();
        async move { api.list_doctors().await }
    });

    let mut show_create = use_signal(|| false);
    let mut show_list = use_signal(|| true);
    let mut editing = use_signal(|| None::<Doctor>);

    let refetch = move |_| doctors.restart();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Doctors" }
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            let next = !*show_create.read();
                            show_create.set(next);
                        },
                        if *show_create.read() { "Hide Form" } else { "Add Doctor" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            let next = !*show_list.read();
                            show_list.set(next);
                        },
                        if *show_list.read() { "Hide Doctors" } else { "Show Doctors" }
                    }
                }
            }
            CardContent {
                if *show_create.read() {
                    CreateDoctorForm {
                        on_created: move |_| {
                            show_create.set(false);
                            doctors.restart();
                        },
                    }
                }

                if let Some(doctor) = editing.read().clone() {
                    // The roster stays hidden while a row is being edited.
                    EditDoctorForm {
                        doctor,
                        on_saved: move |_| {
                            editing.set(None);
                            doctors.restart();
                        },
                        on_cancel: move |_| editing.set(None),
                    }
                } else if *show_list.read() {
                    DoctorTable {
                        doctors: doctors.read().clone(),
                        on_edit: move |doctor| editing.set(Some(doctor)),
                        on_deleted: refetch,
                    }
                }
            }
        }
    }
}

#[component]
fn DoctorTable(
    doctors: Option<Result<Vec<Doctor>, ApiError>>,
    on_edit: EventHandler<Doctor>,
    on_deleted: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut deleting = use_signal(|| None::<String>);

    match doctors {
        None => rsx! {
            Skeleton { style: "height: 8rem;" }
        },
        Some(Err(e)) => rsx! {
            p { class: "load-error", "Could not load doctors: {e}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { "No doctors on the roster yet." }
        },
        Some(Ok(list)) => rsx! {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "ID" }
                    DataTableColumn { "Name" }
                    DataTableColumn { "Specialization" }
                    DataTableColumn { "Qualification" }
                    DataTableColumn { "" }
                }
                DataTableBody {
                    for doctor in list.iter().cloned() {
                        DataTableRow {
                            DataTableCell { "{doctor.doctor_id}" }
                            DataTableCell { "{doctor.doctor_name}" }
                            DataTableCell { "{doctor.specialization}" }
                            DataTableCell { "{doctor.qualification}" }
                            DataTableCell {
                                div { class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: {
                                            let doctor = doctor.clone();
                                            move |_| on_edit.call(doctor.clone())
                                        },
                                        "Update"
                                    }
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        disabled: deleting.read().as_deref() == Some(doctor.id.as_str()),
                                        onclick: {
                                            let api = api.clone();
                                            let id = doctor.id.clone();
                                            move |_| {
                                                let api = api.clone();
                                                let id = id.clone();
                                                spawn(async move {
                                                    deleting.set(Some(id.clone()));
                                                    match api.delete_doctor(&id).await {
                                                        Ok(()) => {
                                                            toast.success(
                                                                "Doctor deleted".to_string(),
                                                                ToastOptions::new(),
                                                            );
                                                            on_deleted.call(());
                                                        }
                                                        Err(e) => {
                                                            tracing::warn!(error = %e, "doctor delete failed");
                                                            toast.error(
                                                                "Deletion error".to_string(),
                                                                ToastOptions::new(),
                                                            );
                                                        }
                                                    }
                                                    deleting.set(None);
                                                });
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn CreateDoctorForm(on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut doctor_id = use_signal(String::new);
    let mut doctor_name = use_signal(String::new);
    let mut specialization = use_signal(String::new);
    let mut qualification = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let req = CreateDoctorRequest {
            doctor_id: doctor_id.read().trim().to_string(),
            doctor_name: doctor_name.read().trim().to_string(),
            specialization: specialization.read().trim().to_string(),
            qualification: qualification.read().trim().to_string(),
            password: password.read().clone(),
        };
        if !req.is_complete() {
            toast.error("Every field is required".to_string(), ToastOptions::new());
            return;
        }
        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            match api.create_doctor(&req).await {
                Ok(()) => {
                    toast.success("Doctor profile created".to_string(), ToastOptions::new());
                    doctor_id.set(String::new());
                    doctor_name.set(String::new());
                    specialization.set(String::new());
                    qualification.set(String::new());
                    password.set(String::new());
                    on_created.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "doctor create failed");
                    toast.error("Error in creating profile".to_string(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Form {
            class: "doctor-form",
            onsubmit: handle_submit,
            FormRow {
                Input {
                    label: "Doctor ID",
                    value: doctor_id.read().clone(),
                    on_input: move |evt: FormEvent| doctor_id.set(evt.value()),
                }
                Input {
                    label: "Name",
                    value: doctor_name.read().clone(),
                    on_input: move |evt: FormEvent| doctor_name.set(evt.value()),
                }
            }
            FormRow {
                Input {
                    label: "Specialization",
                    value: specialization.read().clone(),
                    on_input: move |evt: FormEvent| specialization.set(evt.value()),
                }
                Input {
                    label: "Qualification",
                    value: qualification.read().clone(),
                    on_input: move |evt: FormEvent| qualification.set(evt.value()),
                }
            }
            Input {
                label: "Password",
                input_type: "password",
                value: password.read().clone(),
                on_input: move |evt: FormEvent| password.set(evt.value()),
            }
            Button {
                disabled: *in_flight.read(),
                if *in_flight.read() { "Creating..." } else { "Create Doctor" }
            }
        }
    }
}

#[component]
fn EditDoctorForm(doctor: Doctor, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let record_id = doctor.id.clone();
    let mut doctor_id = use_signal(|| doctor.doctor_id.clone());
    let mut doctor_name = use_signal(|| doctor.doctor_name.clone());
    let mut specialization = use_signal(|| doctor.specialization.clone());
    let mut qualification = use_signal(|| doctor.qualification.clone());
    let mut in_flight = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let req = UpdateDoctorRequest {
            doctor_id: doctor_id.read().trim().to_string(),
            doctor_name: doctor_name.read().trim().to_string(),
            specialization: specialization.read().trim().to_string(),
            qualification: qualification.read().trim().to_string(),
        };
        if !req.is_complete() {
            toast.error("Every field is required".to_string(), ToastOptions::new());
            return;
        }
        let api = api.clone();
        let id = record_id.clone();
        spawn(async move {
            in_flight.set(true);
            match api.update_doctor(&id, &req).await {
                Ok(()) => {
                    toast.success("Doctor updated".to_string(), ToastOptions::new());
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "doctor update failed");
                    toast.error("Error in updation".to_string(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Form {
            class: "doctor-form",
            onsubmit: handle_submit,
            h4 { "Editing {doctor.doctor_name}" }
            FormRow {
                Input {
                    label: "Doctor ID",
                    value: doctor_id.read().clone(),
                    on_input: move |evt: FormEvent| doctor_id.set(evt.value()),
                }
                Input {
                    label: "Name",
                    value: doctor_name.read().clone(),
                    on_input: move |evt: FormEvent| doctor_name.set(evt.value()),
                }
            }
            FormRow {
                Input {
                    label: "Specialization",
                    value: specialization.read().clone(),
                    on_input: move |evt: FormEvent| specialization.set(evt.value()),
                }
                Input {
                    label: "Qualification",
                    value: qualification.read().clone(),
                    on_input: move |evt: FormEvent| qualification.set(evt.value()),
                }
            }
            Button {
                disabled: *in_flight.read(),
                if *in_flight.read() { "Saving..." } else { "Save Changes" }
            }
        }
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| on_cancel.call(()),
            "Cancel"
        }
    }
}

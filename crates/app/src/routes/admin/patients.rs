use dioxus::prelude::*;
use shared_types::Patient;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    Input, SearchBar, Skeleton, ToastOptions,
};

use crate::format_helpers::age_today;
use crate::use_api;

/// What the search button should do next. Only `Fetch` issues a request;
/// `Reset` clears the query text and the flag and leaves the displayed
/// rows as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SearchStep {
    Fetch {
        name: Option<String>,
        email: Option<String>,
    },
    Reset,
    MissingCriteria,
}

fn next_search_step(search_active: bool, name: &str, email: &str) -> SearchStep {
    if search_active {
        return SearchStep::Reset;
    }
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() && email.is_empty() {
        return SearchStep::MissingCriteria;
    }
    SearchStep::Fetch {
        name: (!name.is_empty()).then(|| name.to_string()),
        email: (!email.is_empty()).then(|| email.to_string()),
    }
}

/// Patient lookup panel. The full list loads once; a search replaces the
/// displayed rows with the filtered result. Clear Search resets the
/// query fields and the search flag but leaves the last result set on
/// screen until the next search or a page revisit.
#[component]
pub fn PatientsPanel() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut patients = use_signal(Vec::<Patient>::new);
    let mut loaded = use_signal(|| false);
    let mut name_query = use_signal(String::new);
    let mut email_query = use_signal(String::new);
    let mut search_active = use_signal(|| false);
    let mut show_list = use_signal(|| true);

    {
        let api = api.clone();
        use_future(move || {
            let api = api.clone();
            async move {
                match api.list_patients().await {
                    Ok(list) => patients.set(list),
                    Err(e) => {
                        tracing::warn!(error = %e, "patient list fetch failed");
                    }
                }
                loaded.set(true);
            }
        });
    }

    // One action button: Search until a search is active, then Clear
    // Search. The transition itself is `next_search_step`; only Fetch
    // touches the network, so Reset leaves the displayed rows alone.
    let search_or_clear = {
        let api = api.clone();
        move |_| {
            let step = next_search_step(
                *search_active.read(),
                &name_query.read(),
                &email_query.read(),
            );
            match step {
                SearchStep::Reset => {
                    name_query.set(String::new());
                    email_query.set(String::new());
                    search_active.set(false);
                }
                SearchStep::MissingCriteria => {
                    toast.error(
                        "Enter a name or an email to search".to_string(),
                        ToastOptions::new(),
                    );
                }
                SearchStep::Fetch { name, email } => {
                    let api = api.clone();
                    spawn(async move {
                        match api
                            .search_patients(name.as_deref(), email.as_deref())
                            .await
                        {
                            Ok(list) => {
                                patients.set(list);
                                search_active.set(true);
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "patient search failed");
                                toast.error("Search failed".to_string(), ToastOptions::new());
                            }
                        }
                    });
                }
            }
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Patients" }
                CardDescription { "Everyone who has booked an appointment." }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        let next = !*show_list.read();
                        show_list.set(next);
                    },
                    if *show_list.read() { "Hide Patients" } else { "Show Patients" }
                }
            }
            if *show_list.read() {
                CardContent {
                    SearchBar {
                        Input {
                            placeholder: "Search by name",
                            value: name_query.read().clone(),
                            on_input: move |evt: FormEvent| name_query.set(evt.value()),
                        }
                        Input {
                            placeholder: "Search by email",
                            value: email_query.read().clone(),
                            on_input: move |evt: FormEvent| email_query.set(evt.value()),
                        }
                        Button {
                            onclick: search_or_clear,
                            if *search_active.read() { "Clear Search" } else { "Search" }
                        }
                    }

                    if !*loaded.read() {
                        Skeleton { style: "height: 8rem;" }
                    } else if patients.read().is_empty() {
                        if *search_active.read() {
                            p { "No patients match your search." }
                        } else {
                            p { "No patients yet." }
                        }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Name" }
                                DataTableColumn { "Email" }
                                DataTableColumn { "Age" }
                            }
                            DataTableBody {
                                for patient in patients.read().iter().cloned() {
                                    DataTableRow {
                                        DataTableCell { "{patient.patient_name}" }
                                        DataTableCell { "{patient.email}" }
                                        DataTableCell {
                                            match patient.dob.as_deref().and_then(age_today) {
                                                Some(age) => rsx! { span { "{age}" } },
                                                None => rsx! { span { class: "muted", "—" } },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_with_criteria_fetches_and_activates() {
        assert_eq!(
            next_search_step(false, " Jane ", ""),
            SearchStep::Fetch {
                name: Some("Jane".to_string()),
                email: None,
            }
        );
        assert_eq!(
            next_search_step(false, "", "jane@example.com"),
            SearchStep::Fetch {
                name: None,
                email: Some("jane@example.com".to_string()),
            }
        );
    }

    #[test]
    fn search_without_criteria_is_rejected() {
        assert_eq!(next_search_step(false, "", "  "), SearchStep::MissingCriteria);
    }

    #[test]
    fn clear_resets_without_fetching() {
        // Once a search is active the button always resets, even with
        // fresh criteria typed in; no request is issued and the rows on
        // screen are not replaced.
        assert_eq!(next_search_step(true, "Jane", ""), SearchStep::Reset);
        assert_eq!(next_search_step(true, "", ""), SearchStep::Reset);
    }
}

use dioxus::prelude::*;
use shared_ui::{PageHeader, PageTitle};

use super::doctors::DoctorsPanel;
use super::patients::PatientsPanel;

/// Admin home: doctor roster management on top, patient lookup below.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        section { class: "admin-dashboard",
            PageHeader {
                PageTitle { "Admin Dashboard" }
            }
            DoctorsPanel {}
            PatientsPanel {}
        }
    }
}

//! Endpoint paths and query builders for the remote API.

pub(crate) const DOCTORS: &str = "/doctor";
pub(crate) const CREATE_DOCTOR: &str = "/doctor/createDoctor";
pub(crate) const PATIENTS: &str = "/patient";
pub(crate) const SEARCH_PATIENTS: &str = "/patient/getPatient";
pub(crate) const APPOINTMENTS: &str = "/appointment";
pub(crate) const APPOINTMENTS_FOR: &str = "/appointment/getAppointment";
pub(crate) const NEW_APPOINTMENT: &str = "/appointment/newAppointment";
pub(crate) const LOGIN: &str = "/auth/login";
pub(crate) const SESSION: &str = "/auth/me";
pub(crate) const SEND_OTP: &str = "/patient/sendOtp";
pub(crate) const VERIFY_OTP: &str = "/patient/verifyOtp";

pub(crate) fn update_doctor(id: &str) -> String {
    format!("/doctor/updateDoctor/{id}")
}

pub(crate) fn delete_doctor(id: &str) -> String {
    format!("/doctor/deleteDoctor/{id}")
}

pub(crate) fn delete_appointment(id: &str) -> String {
    format!("/appointment/deleteAppointment/{id}")
}

pub(crate) fn send_diagnosis(id: &str) -> String {
    format!("/appointment/sendDiagnosis/{id}")
}

pub(crate) fn complete_appointment(id: &str) -> String {
    format!("/appointment/completeAppointment/{id}")
}

/// Build the query string for the patient search endpoint. Only criteria
/// that are present appear; values are percent-encoded.
pub fn patient_search_query(name: Option<&str>, email: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(name) = name {
        parts.push(format!("patientName={}", urlencoding::encode(name)));
    }
    if let Some(email) = email {
        parts.push(format!("email={}", urlencoding::encode(email)));
    }
    parts.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn id_paths_interpolate() {
        assert_eq!(update_doctor("651f"), "/doctor/updateDoctor/651f");
        assert_eq!(delete_doctor("651f"), "/doctor/deleteDoctor/651f");
        assert_eq!(
            send_diagnosis("a1b2"),
            "/appointment/sendDiagnosis/a1b2"
        );
        assert_eq!(
            complete_appointment("a1b2"),
            "/appointment/completeAppointment/a1b2"
        );
    }

    #[test]
    fn search_query_encodes_criteria() {
        assert_eq!(
            patient_search_query(Some("Jane Moore"), None),
            "patientName=Jane%20Moore"
        );
        assert_eq!(
            patient_search_query(Some("Jane"), Some("jane@example.com")),
            "patientName=Jane&email=jane%40example.com"
        );
        assert_eq!(patient_search_query(None, None), "");
    }
}

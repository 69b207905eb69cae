use serde::{Deserialize, Serialize};

// ── Appointment wire records ────────────────────────────────────────

/// An appointment in the doctor's daily queue. Created by a patient
/// booking, displayed to the doctor, then completed or cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    pub email: String,
    pub slot: String,
    pub reasonforappointment: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Draft record for the patient booking form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "patientName")]
    pub patient_name: String,
    pub email: String,
    pub slot: String,
    pub reasonforappointment: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
}

/// Body of the send-diagnosis POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub message: String,
}

/// Appointment slots offered by the booking form.
pub const APPOINTMENT_SLOTS: &[&str] = &[
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM",
    "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM",
];

impl BookingRequest {
    pub fn is_complete(&self) -> bool {
        !self.patient_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.slot.trim().is_empty()
            && !self.reasonforappointment.trim().is_empty()
            && !self.appointment_date.trim().is_empty()
    }
}

/// Normalize diagnosis text for transmission: every run of carriage
/// returns and line feeds collapses to a single `<br/>` token. Empty text
/// passes through unchanged; the backend accepts an empty diagnosis.
pub fn format_diagnosis_message(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_break {
                out.push_str("<br/>");
                in_break = true;
            }
        } else {
            out.push(ch);
            in_break = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_uses_backend_field_names() {
        let json = r#"{
            "_id": "6521",
            "patientName": "Jane Moore",
            "email": "jane@example.com",
            "slot": "10:00 AM",
            "reasonforappointment": "Chest pain",
            "appointmentDate": "2026-09-02T00:00:00Z"
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.reasonforappointment, "Chest pain");
        assert_eq!(appt.slot, "10:00 AM");
        assert!(appt.diagnosis.is_none());
        assert!(!appt.completed);
    }

    #[test]
    fn newlines_become_break_tokens() {
        assert_eq!(
            format_diagnosis_message("line1\nline2"),
            "line1<br/>line2"
        );
    }

    #[test]
    fn crlf_runs_collapse_to_one_token() {
        assert_eq!(
            format_diagnosis_message("line1\r\n\r\nline2\nline3"),
            "line1<br/>line2<br/>line3"
        );
    }

    #[test]
    fn empty_diagnosis_is_sent_as_is() {
        assert_eq!(format_diagnosis_message(""), "");
        // Whitespace is not trimmed either; only line breaks change.
        assert_eq!(format_diagnosis_message("  "), "  ");
    }

    #[test]
    fn text_without_breaks_is_untouched() {
        assert_eq!(
            format_diagnosis_message("rest and fluids"),
            "rest and fluids"
        );
    }

    #[test]
    fn booking_draft_requires_every_field() {
        let mut draft = BookingRequest {
            patient_name: "Jane Moore".into(),
            email: "jane@example.com".into(),
            slot: "10:00 AM".into(),
            reasonforappointment: "Chest pain".into(),
            appointment_date: "2026-09-02".into(),
        };
        assert!(draft.is_complete());
        draft.slot.clear();
        assert!(!draft.is_complete());
    }
}

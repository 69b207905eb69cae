use serde::{Deserialize, Serialize};

/// A patient record. `dob` is an ISO-8601 date string the backend stores
/// verbatim; the client derives the displayed age from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    pub email: String,
    #[serde(default)]
    pub dob: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_deserializes_backend_shape() {
        let json = r#"{"_id":"6520","patientName":"Jane Moore","email":"jane@example.com","dob":"1996-08-30"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.patient_name, "Jane Moore");
        assert_eq!(patient.dob.as_deref(), Some("1996-08-30"));
    }

    #[test]
    fn missing_dob_is_tolerated() {
        let json = r#"{"_id":"6520","patientName":"Jane Moore","email":"jane@example.com"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert!(patient.dob.is_none());
    }
}

use serde::{Deserialize, Serialize};

// ── Doctor wire records ─────────────────────────────────────────────
//
// Field names mirror the backend's JSON exactly (`_id`, `doctorId`, ...);
// the client exchanges these records verbatim and enforces nothing beyond
// required-field presence in forms.

/// A doctor as returned by the backend. The credential used at creation
/// time is never echoed back, so there is no password field here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "doctorName")]
    pub doctor_name: String,
    pub specialization: String,
    pub qualification: String,
}

/// Draft record for the create-doctor form. The password rides along on
/// create only and is never displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "doctorName")]
    pub doctor_name: String,
    pub specialization: String,
    pub qualification: String,
    pub password: String,
}

/// PUT body for updating a doctor; the record is addressed by `_id` in the
/// request path, not in the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "doctorName")]
    pub doctor_name: String,
    pub specialization: String,
    pub qualification: String,
}

impl CreateDoctorRequest {
    /// All fields the backend requires are present.
    pub fn is_complete(&self) -> bool {
        !self.doctor_id.trim().is_empty()
            && !self.doctor_name.trim().is_empty()
            && !self.specialization.trim().is_empty()
            && !self.qualification.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}

impl UpdateDoctorRequest {
    /// All fields the backend requires are present. Updates never carry a
    /// password, so there is no password check here.
    pub fn is_complete(&self) -> bool {
        !self.doctor_id.trim().is_empty()
            && !self.doctor_name.trim().is_empty()
            && !self.specialization.trim().is_empty()
            && !self.qualification.trim().is_empty()
    }
}

impl From<&Doctor> for UpdateDoctorRequest {
    fn from(d: &Doctor) -> Self {
        Self {
            doctor_id: d.doctor_id.clone(),
            doctor_name: d.doctor_name.clone(),
            specialization: d.specialization.clone(),
            qualification: d.qualification.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_uses_backend_field_names() {
        let doctor = Doctor {
            id: "651f".into(),
            doctor_id: "D-100".into(),
            doctor_name: "Dr. Ada Okafor".into(),
            specialization: "Cardiology".into(),
            qualification: "MD".into(),
        };
        let json = serde_json::to_value(&doctor).unwrap();
        assert_eq!(json["_id"], "651f");
        assert_eq!(json["doctorId"], "D-100");
        assert_eq!(json["doctorName"], "Dr. Ada Okafor");
        assert_eq!(json["specialization"], "Cardiology");
        assert_eq!(json["qualification"], "MD");
    }

    #[test]
    fn create_request_carries_password() {
        let req = CreateDoctorRequest {
            doctor_id: "D-100".into(),
            doctor_name: "Dr. Ada Okafor".into(),
            specialization: "Cardiology".into(),
            qualification: "MD".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["password"], "secret");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn incomplete_draft_is_rejected() {
        let mut req = CreateDoctorRequest {
            doctor_id: "D-100".into(),
            doctor_name: "Dr. Ada Okafor".into(),
            specialization: "Cardiology".into(),
            qualification: "MD".into(),
            password: "secret".into(),
        };
        assert!(req.is_complete());
        req.doctor_name = "   ".into();
        assert!(!req.is_complete());
    }

    #[test]
    fn update_draft_requires_every_field_but_no_password() {
        let mut req = UpdateDoctorRequest {
            doctor_id: "D-100".into(),
            doctor_name: "Dr. Ada Okafor".into(),
            specialization: "Cardiology".into(),
            qualification: "MD".into(),
        };
        assert!(req.is_complete());
        req.qualification = "  ".into();
        assert!(!req.is_complete());
        assert!(!UpdateDoctorRequest::default().is_complete());
    }

    #[test]
    fn update_request_from_doctor_drops_ids_and_password() {
        let doctor = Doctor {
            id: "651f".into(),
            doctor_id: "D-100".into(),
            doctor_name: "Dr. Ada Okafor".into(),
            specialization: "Cardiology".into(),
            qualification: "MD".into(),
        };
        let req = UpdateDoctorRequest::from(&doctor);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["doctorName"], "Dr. Ada Okafor");
    }
}

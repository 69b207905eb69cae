//! Typed HTTP client for the hospital appointment backend.
//!
//! The backend owns all business logic and persistence; this crate owns
//! URL construction, the JSON codec, and the error taxonomy. Every
//! mutation is followed by a caller-driven re-fetch rather than a local
//! patch, so nothing here caches.

mod paths;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    format_diagnosis_message, ApiError, Appointment, BookingRequest, CreateDoctorRequest,
    DiagnosisRequest, Doctor, LoginRequest, LoginResponse, Patient, SessionUser,
    UpdateDoctorRequest,
};

pub use paths::patient_search_query;

/// Where the remote API lives. The default can be overridden at build
/// time via `SUNRISE_API_URL`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(
            option_env!("SUNRISE_API_URL")
                .unwrap_or("https://hospital-appointment-backend.onrender.com"),
        )
    }
}

/// Client for the remote REST API. Cheap to clone; pages receive it via
/// context and issue independent, unsynchronized calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // ── Doctors ─────────────────────────────────────────────────────

    /// `GET /doctor`. A body that is not a JSON array (for example an
    /// error object) yields an empty list rather than an error.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.get_collection(paths::DOCTORS).await
    }

    /// `POST /doctor/createDoctor`.
    pub async fn create_doctor(&self, req: &CreateDoctorRequest) -> Result<(), ApiError> {
        self.post_json(paths::CREATE_DOCTOR, req).await
    }

    /// `PUT /doctor/updateDoctor/:id`.
    pub async fn update_doctor(
        &self,
        id: &str,
        req: &UpdateDoctorRequest,
    ) -> Result<(), ApiError> {
        self.put_json(&paths::update_doctor(id), Some(req)).await
    }

    /// `DELETE /doctor/deleteDoctor/:id`.
    pub async fn delete_doctor(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::delete_doctor(id)).await
    }

    // ── Patients ────────────────────────────────────────────────────

    /// `GET /patient`.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get_collection(paths::PATIENTS).await
    }

    /// `GET /patient/getPatient?patientName=&email=`. Either criterion
    /// may be omitted; both are URL-encoded.
    pub async fn search_patients(
        &self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Vec<Patient>, ApiError> {
        let query = paths::patient_search_query(name, email);
        let path = if query.is_empty() {
            paths::SEARCH_PATIENTS.to_string()
        } else {
            format!("{}?{}", paths::SEARCH_PATIENTS, query)
        };
        self.get_collection(&path).await
    }

    // ── Appointments ────────────────────────────────────────────────

    /// `GET /appointment`: the doctor's daily queue.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_collection(paths::APPOINTMENTS).await
    }

    /// `GET /appointment/getAppointment?email=`: a patient's own
    /// appointments, shown on the status page after OTP verification.
    pub async fn appointments_for(&self, email: &str) -> Result<Vec<Appointment>, ApiError> {
        let path = format!(
            "{}?email={}",
            paths::APPOINTMENTS_FOR,
            urlencoding::encode(email)
        );
        self.get_collection(&path).await
    }

    /// `POST /appointment/newAppointment`.
    pub async fn book_appointment(&self, req: &BookingRequest) -> Result<(), ApiError> {
        self.post_json(paths::NEW_APPOINTMENT, req).await
    }

    /// `DELETE /appointment/deleteAppointment/:id`.
    pub async fn delete_appointment(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::delete_appointment(id)).await
    }

    /// `POST /appointment/sendDiagnosis/:id`. Line breaks in the text are
    /// normalized to `<br/>` tokens before transmission; empty text is
    /// sent as-is.
    pub async fn send_diagnosis(&self, id: &str, text: &str) -> Result<(), ApiError> {
        let body = DiagnosisRequest {
            message: format_diagnosis_message(text),
        };
        self.post_json(&paths::send_diagnosis(id), &body).await
    }

    /// `PUT /appointment/completeAppointment/:id`.
    pub async fn complete_appointment(&self, id: &str) -> Result<(), ApiError> {
        self.put_json::<()>(&paths::complete_appointment(id), None)
            .await
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// `POST /auth/login`.
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp = self
            .http
            .post(self.url(paths::LOGIN))
            .json(req)
            .send()
            .await
            .map_err(|e| self.transport("POST", paths::LOGIN, e))?;
        Self::decode_body(Self::expect_ok(resp).await?).await
    }

    /// `GET /auth/me` with a bearer token. The answer, not the
    /// client-side claim decode, is authoritative for role gating.
    pub async fn session_role(&self, token: &str) -> Result<SessionUser, ApiError> {
        let resp = self
            .http
            .get(self.url(paths::SESSION))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.transport("GET", paths::SESSION, e))?;
        Self::decode_body(Self::expect_ok(resp).await?).await
    }

    /// `POST /patient/sendOtp` with the patient's email.
    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        self.post_json(paths::SEND_OTP, &serde_json::json!({ "email": email }))
            .await
    }

    /// `POST /patient/verifyOtp`. A wrong passcode comes back as a
    /// non-2xx status.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<(), ApiError> {
        self.post_json(
            paths::VERIFY_OTP,
            &serde_json::json!({ "email": email, "otp": code }),
        )
        .await
    }

    // ── Plumbing ────────────────────────────────────────────────────

    fn transport(&self, method: &str, path: &str, err: reqwest::Error) -> ApiError {
        tracing::error!(%method, %path, error = %err, "request failed");
        ApiError::Transport(err.to_string())
    }

    async fn expect_ok(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        tracing::warn!(code = status.as_u16(), "server rejected request");
        Err(ApiError::status(status.as_u16(), message))
    }

    async fn decode_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.transport("GET", path, e))?;
        let value: serde_json::Value = Self::decode_body(Self::expect_ok(resp).await?).await?;
        Ok(collection_from_value(value))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport("POST", path, e))?;
        Self::expect_ok(resp).await.map(|_| ())
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let mut req = self.http.put(self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| self.transport("PUT", path, e))?;
        Self::expect_ok(resp).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| self.transport("DELETE", path, e))?;
        Self::expect_ok(resp).await.map(|_| ())
    }
}

/// Deserialize a collection defensively: a non-array body (for example an
/// error object the backend returned with a 200) is treated as empty, and
/// an array that fails row decoding is treated as empty too.
fn collection_from_value<T: DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    if !value.is_array() {
        tracing::warn!("expected a JSON array, got a different shape; treating as empty");
        return Vec::new();
    }
    match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "collection rows failed to decode; treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_array_doctor_body_becomes_empty_list() {
        let body = serde_json::json!({ "error": "database unavailable" });
        let doctors: Vec<Doctor> = collection_from_value(body);
        assert!(doctors.is_empty());
    }

    #[test]
    fn array_body_decodes_rows() {
        let body = serde_json::json!([{
            "_id": "651f",
            "doctorId": "D-100",
            "doctorName": "Dr. Ada Okafor",
            "specialization": "Cardiology",
            "qualification": "MD"
        }]);
        let doctors: Vec<Doctor> = collection_from_value(body);
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].doctor_name, "Dr. Ada Okafor");
    }

    #[test]
    fn malformed_rows_become_empty_list() {
        let body = serde_json::json!([{ "unexpected": true }]);
        let doctors: Vec<Doctor> = collection_from_value(body);
        assert!(doctors.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:4000/"));
        assert_eq!(client.url("/doctor"), "http://localhost:4000/doctor");
    }
}

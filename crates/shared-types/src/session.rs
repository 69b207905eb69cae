use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

// ── Roles ───────────────────────────────────────────────────────────

/// Staff roles carried by session tokens. Patients verify by one-time
/// passcode instead and never hold a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Auth wire records ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// The backend's answer to "who does this token belong to". This, not the
/// client-side claim decode, is the authority for role gating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
}

// ── Client-side claim decode (display only) ─────────────────────────

/// Claims decoded from the token's payload segment. The signature is not
/// checked here, so these values feed display only, never access
/// control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Why a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not three dot-separated segments.
    Shape,
    /// Payload segment is not valid base64url.
    Encoding,
    /// Payload decodes but is not the expected JSON object.
    Payload,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Shape => write!(f, "token is not in header.payload.signature form"),
            TokenError::Encoding => write!(f, "token payload is not valid base64url"),
            TokenError::Payload => write!(f, "token payload is not a claims object"),
        }
    }
}

impl std::error::Error for TokenError {}

impl SessionClaims {
    /// Decode the middle segment of a compact token as base64url JSON.
    ///
    /// Malformed input returns an error rather than panicking; callers
    /// treat an undecodable token the same as an absent one.
    pub fn decode(token: &str) -> Result<SessionClaims, TokenError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(TokenError::Shape),
        };
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|_| TokenError::Encoding)?;
        serde_json::from_slice(&bytes).map_err(|_| TokenError::Payload)
    }

    /// The claimed role, if it names a known one. Display only.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json);
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn decodes_role_claim() {
        let token = make_token(r#"{"role":"admin","name":"Priya"}"#);
        let claims = SessionClaims::decode(&token).unwrap();
        assert_eq!(claims.role(), Some(Role::Admin));
        assert_eq!(claims.name.as_deref(), Some("Priya"));
    }

    #[test]
    fn unknown_role_claim_maps_to_none() {
        let token = make_token(r#"{"role":"receptionist"}"#);
        let claims = SessionClaims::decode(&token).unwrap();
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn wrong_segment_count_is_rejected() {
        assert_eq!(SessionClaims::decode("onlyonesegment"), Err(TokenError::Shape));
        assert_eq!(SessionClaims::decode("a.b"), Err(TokenError::Shape));
        assert_eq!(SessionClaims::decode("a.b.c.d"), Err(TokenError::Shape));
    }

    #[test]
    fn garbage_payload_is_rejected_not_panicked() {
        assert_eq!(
            SessionClaims::decode("head.!!not-base64!!.sig"),
            Err(TokenError::Encoding)
        );
        let token = format!("head.{}.sig", URL_SAFE_NO_PAD.encode("[1,2,3]"));
        assert_eq!(SessionClaims::decode(&token), Err(TokenError::Payload));
    }

    #[test]
    fn padded_payload_segment_still_decodes() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"role":"doctor"}"#);
        let token = format!("head.{payload}.sig");
        let claims = SessionClaims::decode(&token).unwrap();
        assert_eq!(claims.role(), Some(Role::Doctor));
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse(" DOCTOR "), Some(Role::Doctor));
        assert_eq!(Role::parse("patient"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), r#""doctor""#);
        let role: Role = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, Role::Admin);
    }
}

//! Session service: one place that owns the persisted tokens and the
//! role-gating decision, instead of per-page copies of the decode logic.
//!
//! The token payload is decoded client-side for display only (greeting
//! name in the navbar). Access control always goes through the backend's
//! session endpoint; see `RoleGuard` in the routes module.

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use shared_types::{Role, SessionClaims};

/// Storage key for the given role's token. One string token per role,
/// written at login, removed at logout.
pub fn token_key(role: Role) -> &'static str {
    match role {
        Role::Admin => "sunrise.admin.token",
        Role::Doctor => "sunrise.doctor.token",
    }
}

pub fn stored_token(role: Role) -> Option<String> {
    LocalStorage::get(token_key(role)).ok()
}

pub fn store_token(role: Role, token: &str) {
    if let Err(e) = LocalStorage::set(token_key(role), token) {
        tracing::warn!(error = %e, "failed to persist session token");
    }
}

pub fn clear_token(role: Role) {
    LocalStorage::delete(token_key(role));
}

/// A signed-in staff session.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub role: Role,
    pub token: String,
    /// Display name from the unverified claim decode. Never used for
    /// gating.
    pub display_name: Option<String>,
}

impl ActiveSession {
    fn from_token(role: Role, token: String) -> Self {
        let display_name = SessionClaims::decode(&token)
            .ok()
            .and_then(|claims| claims.name);
        Self {
            role,
            token,
            display_name,
        }
    }
}

/// Global session state, provided once at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<ActiveSession>>,
}

impl SessionState {
    /// Restore whichever role's token is present in storage. A token that
    /// fails the display decode is treated as absent and cleared. It
    /// must not take the render down.
    pub fn restore() -> Self {
        let current = [Role::Admin, Role::Doctor].into_iter().find_map(|role| {
            let token = stored_token(role)?;
            if SessionClaims::decode(&token).is_err() {
                tracing::warn!(%role, "clearing undecodable stored token");
                clear_token(role);
                return None;
            }
            Some(ActiveSession::from_token(role, token))
        });
        Self {
            current: Signal::new(current),
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current.read().as_ref().map(|s| s.role)
    }

    pub fn sign_in(&mut self, role: Role, token: &str) {
        store_token(role, token);
        self.current
            .set(Some(ActiveSession::from_token(role, token.to_string())));
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.current.read().as_ref() {
            clear_token(session.role);
        }
        self.current.set(None);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

// ── Gating decision ─────────────────────────────────────────────────

/// What a guard should do with the current visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogin,
    RedirectError,
}

/// Pure gating decision. `verified` is the role the backend vouched for,
/// `None` when there was no token or the backend rejected it. Data
/// fetches on a protected page only start once this returns `Allow`.
pub fn guard_outcome(required: Role, token_present: bool, verified: Option<Role>) -> GuardOutcome {
    if !token_present {
        return GuardOutcome::RedirectLogin;
    }
    match verified {
        Some(role) if role == required => GuardOutcome::Allow,
        Some(_) => GuardOutcome::RedirectError,
        None => GuardOutcome::RedirectLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_token_goes_to_login() {
        assert_eq!(
            guard_outcome(Role::Admin, false, None),
            GuardOutcome::RedirectLogin
        );
    }

    #[test]
    fn wrong_role_goes_to_error_page() {
        assert_eq!(
            guard_outcome(Role::Admin, true, Some(Role::Doctor)),
            GuardOutcome::RedirectError
        );
        assert_eq!(
            guard_outcome(Role::Doctor, true, Some(Role::Admin)),
            GuardOutcome::RedirectError
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            guard_outcome(Role::Doctor, true, Some(Role::Doctor)),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn rejected_token_goes_back_to_login() {
        // Token present but the backend would not vouch for it.
        assert_eq!(
            guard_outcome(Role::Admin, true, None),
            GuardOutcome::RedirectLogin
        );
    }
}

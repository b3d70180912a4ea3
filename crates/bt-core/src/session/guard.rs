use crate::session::{
    error::IdentityError,
    identity::{clear_session, resolve_identity},
    navigation::NavigationIntent,
    session::Session,
    store::KeyValueStore,
};

use log::{info, warn};

const NOT_FOUND_HINT: &str = "Session Expired. Please log in again.";

/// Session check state for one screen instance.
#[derive(Debug)]
pub enum GuardState {
    Unchecked,
    Valid(Session),
    Invalid(IdentityError),
}

/// Decides whether a screen may fetch data.
///
/// The first `check` moves `Unchecked` to `Valid` or `Invalid`; both are
/// terminal, so later checks return the recorded outcome.
#[derive(Debug)]
pub struct SessionGuard {
    state: GuardState,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self {
            state: GuardState::Unchecked,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn check(&mut self, store: &dyn KeyValueStore) -> &GuardState {
        if matches!(self.state, GuardState::Unchecked) {
            self.state = match resolve_identity(store) {
                Ok(session) => {
                    info!("Session valid for user {}", session.user_id);
                    GuardState::Valid(session)
                }
                Err(e) => {
                    warn!("Session invalid: {e}");
                    GuardState::Invalid(e)
                }
            };
        }

        &self.state
    }

    /// Resolved session, only in the `Valid` state.
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            GuardState::Valid(session) => Some(session),
            _ => None,
        }
    }

    /// Prompt shown when the guard holds no session. A guard that was never
    /// checked reads as an expired session.
    pub fn recovery_hint(&self) -> &'static str {
        match &self.state {
            GuardState::Invalid(e) => e.recovery_hint(),
            GuardState::Unchecked | GuardState::Valid(_) => NOT_FOUND_HINT,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.state, GuardState::Invalid(_))
    }

    /// Called once the user dismissed the re-authentication prompt.
    ///
    /// Clears the cached session and returns the login redirect. Returns
    /// `None` unless the guard is `Invalid`.
    pub fn acknowledge_invalid(&self, store: &dyn KeyValueStore) -> Option<NavigationIntent> {
        if !self.is_invalid() {
            return None;
        }

        if let Err(e) = clear_session(store) {
            warn!("Failed to clear cached session before redirect: {e}");
        }

        Some(NavigationIntent::RedirectToLogin)
    }
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}

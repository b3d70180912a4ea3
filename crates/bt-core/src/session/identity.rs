//! Identity resolution from the locally persisted session blob.

use crate::session::{
    error::{IdentityError, Result as IdentityResult},
    session::{Session, StoredSession},
    store::{KeyValueStore, StoreResult},
};

use log::{debug, info, warn};
use serde_json::{Map, Value};

/// Store key holding the serialized session.
pub const SESSION_KEY: &str = "userData";

/// Store key holding the email of an in-progress password reset.
pub const RESET_EMAIL_KEY: &str = "resetEmail";

/// Accepted user id field names, in priority order.
pub const USER_ID_FIELDS: [&str; 4] = ["userid", "user_id", "userId", "id"];

/// Loads and validates the persisted session.
///
/// Read-only: a bad blob is reported, never repaired or removed here.
pub fn resolve_identity(store: &dyn KeyValueStore) -> IdentityResult<Session> {
    let Some(blob) = store.get(SESSION_KEY)? else {
        info!("No stored session under '{SESSION_KEY}'");
        return Err(IdentityError::not_found());
    };

    let value: Value =
        serde_json::from_str(&blob).map_err(|e| IdentityError::malformed(e.to_string()))?;

    let Value::Object(record) = value else {
        warn!("Stored session is not a JSON object");
        return Err(IdentityError::malformed("session is not a JSON object"));
    };

    match session_from_record(&record) {
        Some(session) => {
            debug!("Resolved session for user {}", session.user_id);
            Ok(session)
        }
        None => {
            let available_keys: Vec<String> = record.keys().cloned().collect();
            warn!("Stored session has no user id; keys present: {available_keys:?}");
            Err(IdentityError::missing_user_id(available_keys))
        }
    }
}

/// Builds a session from any JSON object carrying one of [`USER_ID_FIELDS`].
///
/// Used both for the stored blob and for login responses.
pub(crate) fn session_from_record(record: &Map<String, Value>) -> Option<Session> {
    let user_id = first_user_id(record)?;
    let email = non_empty_str(record.get("email")).map(String::from);
    let display_name = non_empty_str(record.get("username"))
        .map(String::from)
        .or_else(|| email.as_deref().map(email_local_part))
        .unwrap_or_default();

    Some(Session {
        user_id,
        email,
        display_name,
    })
}

/// First identifier in priority order that is a non-empty string or a number.
pub(crate) fn first_user_id(record: &Map<String, Value>) -> Option<String> {
    USER_ID_FIELDS
        .iter()
        .find_map(|field| match record.get(*field) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn email_local_part(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Persists a session record as written at login.
pub fn persist_session(
    store: &dyn KeyValueStore,
    user_id: &str,
    email: Option<&str>,
    username: Option<&str>,
) -> IdentityResult<Session> {
    let stored = StoredSession {
        user_id: user_id.to_string(),
        email: email.map(String::from),
        username: username.map(String::from),
    };

    let blob = serde_json::to_string(&stored)
        .map_err(|e| IdentityError::malformed(e.to_string()))?;
    store.set(SESSION_KEY, &blob)?;

    info!("Persisted session for user {user_id}");
    resolve_identity(store)
}

/// Normalizes a login response and persists it as the session.
///
/// The user id is looked up with the same [`USER_ID_FIELDS`] table as the
/// stored blob. `email` is used when the response does not echo one.
pub fn persist_login_record(
    store: &dyn KeyValueStore,
    record: &Map<String, Value>,
    email: &str,
) -> IdentityResult<Session> {
    let Some(user_id) = first_user_id(record) else {
        let available_keys: Vec<String> = record.keys().cloned().collect();
        warn!("Login response has no user id; keys present: {available_keys:?}");
        return Err(IdentityError::missing_user_id(available_keys));
    };

    let email = non_empty_str(record.get("email")).unwrap_or(email);
    let username =
        non_empty_str(record.get("username")).or_else(|| non_empty_str(record.get("name")));

    persist_session(store, &user_id, Some(email), username)
}

/// Deletes the cached session (logout, expired session acknowledgement).
pub fn clear_session(store: &dyn KeyValueStore) -> StoreResult<()> {
    store.remove(SESSION_KEY)?;
    info!("Cleared stored session");
    Ok(())
}

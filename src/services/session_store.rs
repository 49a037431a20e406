use std::sync::Arc;
use serde::de::DeserializeOwned;
use crate::models::{Role, User};
use crate::storage::KeyValueStore;

const USERS_KEY: &str = "users";
const CURRENT_USER_KEY: &str = "currentUser";

fn parse_json<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed {} entry: {}", key, e);
            None
        }
    }
}

/// Registered-user directory plus the single current-user pointer for one
/// profile.
///
/// Every operation reports failure as a value. Unreadable or corrupted
/// entries read as absent, except that `register` refuses to write over a
/// directory the store failed to return. Every mutation is written through
/// to the backing store before returning.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    // Raw read that treats storage failures as a missing key
    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {} from profile store: {}", key, e);
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        parse_json(key, &raw)
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode {}: {}", key, e);
                return false;
            }
        };
        if let Err(e) = self.store.set(key, &encoded) {
            tracing::error!("Failed to write {} to profile store: {}", key, e);
            return false;
        }
        true
    }

    /// All registered users in registration order.
    pub fn users(&self) -> Vec<User> {
        self.read_json(USERS_KEY).unwrap_or_default()
    }

    /// Register a user and make it the current session.
    ///
    /// Returns `false` without touching the store when the email is already
    /// taken, the email is blank, or the quota is negative or not finite.
    /// The password is accepted for interface parity but never stored.
    pub fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
        role: Role,
        quota: Option<f64>,
    ) -> bool {
        if email.trim().is_empty() {
            tracing::debug!("Rejecting registration with blank email");
            return false;
        }
        if let Some(q) = quota {
            if !q.is_finite() || q < 0.0 {
                tracing::debug!("Rejecting registration for {}: invalid quota {}", email, q);
                return false;
            }
        }

        // A failed read must not be mistaken for an empty directory here,
        // the write below would replace every registered user
        let previous = match self.store.get(USERS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Registration aborted, cannot read user directory: {}", e);
                return false;
            }
        };
        let mut users: Vec<User> = previous
            .as_deref()
            .and_then(|raw| parse_json(USERS_KEY, raw))
            .unwrap_or_default();
        if users.iter().any(|u| u.email == email) {
            tracing::info!("Registration refused, email already exists: {}", email);
            return false;
        }

        let user = User {
            email: email.to_string(),
            name: name.to_string(),
            role,
            quota,
        };
        users.push(user.clone());

        if !self.write_json(USERS_KEY, &users) {
            return false;
        }

        if !self.write_json(CURRENT_USER_KEY, &user) {
            // Undo the directory write so a failed registration leaves nothing behind
            let restored = match previous {
                Some(raw) => self.store.set(USERS_KEY, &raw),
                None => self.store.remove(USERS_KEY),
            };
            if let Err(e) = restored {
                tracing::error!("Failed to roll back user directory: {}", e);
            }
            return false;
        }

        tracing::info!("Registered user {} as {:?}", email, role);
        true
    }

    /// Log in by exact email match.
    ///
    /// The password is NOT verified: any password succeeds for a known
    /// email. This is a known security gap to close once real credentials
    /// exist; callers cannot distinguish "unknown user" from "bad password".
    pub fn login(&self, email: &str, _password: &str) -> Option<User> {
        let user = match self.users().into_iter().find(|u| u.email == email) {
            Some(user) => user,
            None => {
                tracing::info!("Login failed, unknown email: {}", email);
                return None;
            }
        };

        tracing::warn!("Logging in {} without password verification", email);
        if !self.write_json(CURRENT_USER_KEY, &user) {
            return None;
        }
        Some(user)
    }

    // Idempotent
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(CURRENT_USER_KEY) {
            tracing::error!("Failed to clear current user: {}", e);
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_json(CURRENT_USER_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

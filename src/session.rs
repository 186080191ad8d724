// Session store - who is signed in
//
// Sign-in here is presentation only: whatever name and email the form
// produced become the session. Nothing is verified. The session survives
// restarts through the local store under a single key.

use crate::storage::LocalStore;
use serde::{Deserialize, Serialize};

/// Local store key for the persisted user record
pub const SESSION_KEY: &str = "sonu_user";

/// Every user gets the same id; there is no account backend to assign one
pub const PLACEHOLDER_USER_ID: &str = "u1";

/// The signed-in visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Holds the current user (or none) and mirrors it into the local store
pub struct SessionStore {
    current: Option<User>,
    store: Box<dyn LocalStore>,
}

impl SessionStore {
    /// Build the store and rehydrate any persisted session
    ///
    /// Persisted data that does not parse as a user record is treated as
    /// "no session": it is logged and removed.
    pub fn restore(store: Box<dyn LocalStore>) -> Self {
        let mut session = Self {
            current: None,
            store,
        };

        if let Some(raw) = session.store.get(SESSION_KEY) {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::info!("Restored session for {}", user.name);
                    session.current = Some(user);
                }
                Err(e) => {
                    tracing::warn!("Discarding malformed persisted session: {}", e);
                    if let Err(e) = session.store.remove(SESSION_KEY) {
                        tracing::warn!("Failed to clear malformed session: {}", e);
                    }
                }
            }
        }

        session
    }

    /// Sign in with unvalidated form values
    pub fn login(&mut self, name: &str, email: &str) -> User {
        let user = User {
            id: PLACEHOLDER_USER_ID.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };

        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.set(SESSION_KEY, json) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }

        tracing::info!("Signed in as {} <{}>", user.name, user.email);
        self.current = Some(user.clone());
        user
    }

    /// Clear the in-memory and persisted session
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!("Signed out {}", user.name);
        }
        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Raw persisted record, if any
    pub fn persisted(&self) -> Option<String> {
        self.store.get(SESSION_KEY)
    }
}

//! Persisted identity of the logged-in user.
//!
//! The full user is stored as JSON under [`USER_KEY`] and, redundantly, its
//! id under [`USER_ID_KEY`]. Writes are not transactional: if the second
//! write fails the first one stays.
//!
//! Reads never fail. A missing, unreadable or malformed value loads as "no
//! session" and is reported through a `tracing` warning instead.

use std::sync::Arc;

use tracing::{info, warn};
use zenflow_core::models::User;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

pub const USER_KEY: &str = "user";
pub const USER_ID_KEY: &str = "userId";

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, user: &User) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &json)?;
        self.store.set(USER_ID_KEY, &serde_json::to_string(&user.id)?)?;
        info!(user_id = user.id, "session saved");
        Ok(())
    }

    pub fn load(&self) -> Option<User> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read session, treating as logged out");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "stored session is malformed, treating as logged out");
                None
            }
        }
    }

    pub fn load_id(&self) -> Option<i64> {
        let raw = match self.store.get(USER_ID_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read session id, treating as logged out");
                return None;
            }
        };
        match raw.trim().parse() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, raw = %raw, "stored session id is malformed, treating as logged out");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(USER_KEY)?;
        self.store.remove(USER_ID_KEY)?;
        info!("session cleared");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }
}

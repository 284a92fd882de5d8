//! The explicit session object handed to every screen.
//!
//! Initialized once at start from the session store, changed only by login
//! and logout. Screens read identity from here and never touch storage.

use tracing::{info, warn};
use zenflow_core::models::User;
use zenflow_storage::SessionStore;

use crate::error::AppError;
use crate::navigation::{AuthState, Route};

pub struct SessionContext {
    store: SessionStore,
    user: Option<User>,
}

impl SessionContext {
    pub fn init(store: SessionStore) -> Self {
        let user = store.load();
        let ctx = Self { store, user };
        info!(state = ?ctx.auth_state(), "session initialized");
        ctx
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::of(self.user.as_ref())
    }

    pub fn start_route(&self) -> Route {
        Route::start(self.auth_state())
    }

    pub fn require_user(&self) -> Result<&User, AppError> {
        self.user.as_ref().ok_or(AppError::Unauthorized)
    }

    pub fn require_manager(&self) -> Result<&User, AppError> {
        match self.require_user()? {
            user if user.is_manager => Ok(user),
            _ => Err(AppError::NotManager),
        }
    }

    /// Persist `user` and make it the active session.
    pub(crate) fn sign_in(&mut self, user: User) -> Result<(), AppError> {
        self.store.save(&user)?;
        info!(user_id = user.id, manager = user.is_manager, "signed in");
        self.user = Some(user);
        Ok(())
    }

    /// End the session. Always lands on the login screen, even when the
    /// stored session could not be removed.
    pub fn logout(&mut self) -> Route {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored session during logout");
        }
        if let Some(user) = self.user.take() {
            info!(user_id = user.id, "logged out");
        }
        Route::Login
    }
}

//! User endpoints: login and lookups.

use std::sync::Arc;

use tracing::info;
use zenflow_core::endpoints;
use zenflow_core::models::{LoginRequest, User};

use crate::backend::{ApiRequest, HttpBackend, fetch_json, to_body};
use crate::error::ApiError;

#[derive(Clone)]
pub struct UserClient {
    backend: Arc<dyn HttpBackend>,
}

impl UserClient {
    pub fn new(backend: Arc<dyn HttpBackend>) -> Self {
        Self { backend }
    }

    /// Exchange credentials for the authenticated user.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        info!(email = %credentials.email, "logging in");
        fetch_json(
            self.backend.as_ref(),
            ApiRequest::post(endpoints::LOGIN, to_body(credentials)?),
        )
        .await
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        fetch_json(self.backend.as_ref(), ApiRequest::get(endpoints::user(id))).await
    }

    /// Active users only; the server filters out soft-deleted accounts.
    pub async fn list_active(&self) -> Result<Vec<User>, ApiError> {
        fetch_json(self.backend.as_ref(), ApiRequest::get(endpoints::USERS)).await
    }
}

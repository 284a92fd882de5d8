//! Record transport: create, list, update and delete stress records.

use std::sync::Arc;

use tracing::info;
use zenflow_core::endpoints;
use zenflow_core::models::{Record, RecordPayload};

use crate::backend::{ApiRequest, HttpBackend, ReqwestBackend, fetch_empty, fetch_json, to_body};
use crate::config::ApiConfig;
use crate::error::{ApiError, UPDATE_UNAVAILABLE_MESSAGE};

#[derive(Clone)]
pub struct RecordClient {
    backend: Arc<dyn HttpBackend>,
    supports_update: bool,
}

impl RecordClient {
    pub fn new(backend: Arc<dyn HttpBackend>, supports_update: bool) -> Self {
        Self {
            backend,
            supports_update,
        }
    }

    /// Build a client over a reqwest backend for `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let backend = ReqwestBackend::shared(config.clone())?;
        Ok(Self::new(backend, config.supports_update))
    }

    /// Create a record. The level is sent as-is; range checks belong to the caller.
    pub async fn create(
        &self,
        owner_id: i64,
        stress_level: i32,
        notes: Option<String>,
    ) -> Result<Record, ApiError> {
        let payload = RecordPayload {
            owner_id,
            stress_level,
            notes,
        };
        let record: Record = fetch_json(
            self.backend.as_ref(),
            ApiRequest::post(endpoints::RECORDS, to_body(&payload)?),
        )
        .await?;
        info!(record_id = record.id, owner_id, "record created");
        Ok(record)
    }

    /// Every active record across all users.
    pub async fn list_all(&self) -> Result<Vec<Record>, ApiError> {
        fetch_json(self.backend.as_ref(), ApiRequest::get(endpoints::RECORDS)).await
    }

    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Record>, ApiError> {
        fetch_json(
            self.backend.as_ref(),
            ApiRequest::get(endpoints::records_by_owner(owner_id)),
        )
        .await
    }

    /// Replace level and notes on a record owned by `owner_id`.
    ///
    /// Fails with [`ApiError::NotImplemented`] without contacting the server
    /// when the backend has no update endpoint.
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        stress_level: i32,
        notes: Option<String>,
    ) -> Result<Record, ApiError> {
        if !self.supports_update {
            return Err(ApiError::NotImplemented(UPDATE_UNAVAILABLE_MESSAGE.to_string()));
        }
        let payload = RecordPayload {
            owner_id,
            stress_level,
            notes,
        };
        let record = fetch_json(
            self.backend.as_ref(),
            ApiRequest::put(endpoints::owned_record(id, owner_id), to_body(&payload)?),
        )
        .await?;
        info!(record_id = id, owner_id, "record updated");
        Ok(record)
    }

    /// Logically delete a record owned by `owner_id`.
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), ApiError> {
        fetch_empty(
            self.backend.as_ref(),
            ApiRequest::delete(endpoints::owned_record(id, owner_id)),
        )
        .await?;
        info!(record_id = id, owner_id, "record deleted");
        Ok(())
    }
}

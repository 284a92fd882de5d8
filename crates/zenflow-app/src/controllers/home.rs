use zenflow_api::RecordClient;
use zenflow_core::models::{Record, StressLevel};

use super::{normalize_notes, parse_level};
use crate::error::AppError;
use crate::scope::{ScopeHandle, ScreenScope};
use crate::session::SessionContext;

/// The register screen: pick today's level, optionally add notes, submit.
pub struct HomeController {
    records: RecordClient,
    owner_id: i64,
    scope: ScreenScope,
    selected: Option<StressLevel>,
    notes: String,
}

impl HomeController {
    pub fn open(session: &SessionContext, records: RecordClient) -> Result<Self, AppError> {
        let owner_id = session.require_user()?.id;
        Ok(Self {
            records,
            owner_id,
            scope: ScreenScope::new(),
            selected: None,
            notes: String::new(),
        })
    }

    pub fn scope(&self) -> ScopeHandle {
        self.scope.handle()
    }

    pub fn selected(&self) -> Option<StressLevel> {
        self.selected
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn select_level(&mut self, value: u8) -> Result<StressLevel, AppError> {
        let level = parse_level(value)?;
        self.selected = Some(level);
        Ok(level)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Send the form. On success the form is cleared; on failure it is kept
    /// so the user can retry.
    pub async fn submit(&mut self) -> Result<Record, AppError> {
        let level = self
            .selected
            .ok_or_else(|| AppError::validation("Please select a stress level."))?;
        let notes = normalize_notes(&self.notes);
        let record = self
            .scope
            .run(self.records.create(self.owner_id, i32::from(level.value()), notes))
            .await??;
        self.selected = None;
        self.notes.clear();
        Ok(record)
    }
}

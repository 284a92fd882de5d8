use zenflow_api::RecordClient;
use zenflow_core::models::{Record, StressLevel};

use super::{normalize_notes, parse_level};
use crate::error::AppError;
use crate::scope::{ScopeHandle, ScreenScope};
use crate::session::SessionContext;

/// In-progress edit of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub record_id: i64,
    pub level: StressLevel,
    pub notes: String,
}

/// The history screen: the owner's records plus edit and delete.
///
/// Every mutation is followed by a full reload of the owner's list, one
/// request after the other.
pub struct HistoryController {
    records: RecordClient,
    owner_id: i64,
    scope: ScreenScope,
    items: Vec<Record>,
    draft: Option<EditDraft>,
}

impl HistoryController {
    pub fn open(session: &SessionContext, records: RecordClient) -> Result<Self, AppError> {
        let owner_id = session.require_user()?.id;
        Ok(Self {
            records,
            owner_id,
            scope: ScreenScope::new(),
            items: Vec::new(),
            draft: None,
        })
    }

    pub fn scope(&self) -> ScopeHandle {
        self.scope.handle()
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    pub async fn load(&mut self) -> Result<&[Record], AppError> {
        let items = self
            .scope
            .run(self.records.list_by_owner(self.owner_id))
            .await??;
        self.items = items;
        Ok(&self.items)
    }

    /// Start editing a record from the loaded list.
    pub fn begin_edit(&mut self, record_id: i64) -> Result<&EditDraft, AppError> {
        let record = self
            .items
            .iter()
            .find(|r| r.id == record_id)
            .ok_or_else(|| AppError::validation(format!("Record {record_id} not found.")))?;
        let level = record.level().ok_or_else(|| {
            AppError::validation(format!(
                "Record {record_id} has an invalid stress level ({}).",
                record.stress_level
            ))
        })?;
        let draft = EditDraft {
            record_id,
            level,
            notes: record.notes.clone().unwrap_or_default(),
        };
        Ok(self.draft.insert(draft))
    }

    pub fn set_draft_level(&mut self, value: u8) -> Result<(), AppError> {
        let level = parse_level(value)?;
        self.draft_mut()?.level = level;
        Ok(())
    }

    pub fn set_draft_notes(&mut self, notes: impl Into<String>) -> Result<(), AppError> {
        self.draft_mut()?.notes = notes.into();
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Send the draft, then reload. The draft survives a failed update.
    pub async fn save_edit(&mut self) -> Result<Record, AppError> {
        let draft = self
            .draft
            .clone()
            .ok_or_else(|| AppError::validation("Nothing is being edited."))?;
        let updated = self
            .scope
            .run(self.records.update(
                draft.record_id,
                self.owner_id,
                i32::from(draft.level.value()),
                normalize_notes(&draft.notes),
            ))
            .await??;
        self.draft = None;
        self.load().await?;
        Ok(updated)
    }

    pub async fn delete(&mut self, record_id: i64) -> Result<(), AppError> {
        self.scope
            .run(self.records.delete(record_id, self.owner_id))
            .await??;
        if self.draft.as_ref().is_some_and(|d| d.record_id == record_id) {
            self.draft = None;
        }
        self.load().await?;
        Ok(())
    }

    fn draft_mut(&mut self) -> Result<&mut EditDraft, AppError> {
        self.draft
            .as_mut()
            .ok_or_else(|| AppError::validation("Nothing is being edited."))
    }
}

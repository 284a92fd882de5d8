use zenflow_api::RecordClient;
use zenflow_core::models::Record;
use zenflow_core::stats::{self, DashboardStats};

use crate::error::AppError;
use crate::scope::{ScopeHandle, ScreenScope};
use crate::session::SessionContext;

/// Manager dashboard over every user's records.
pub struct DashboardController {
    records: RecordClient,
    scope: ScreenScope,
    items: Vec<Record>,
}

impl DashboardController {
    pub fn open(session: &SessionContext, records: RecordClient) -> Result<Self, AppError> {
        session.require_manager()?;
        Ok(Self {
            records,
            scope: ScreenScope::new(),
            items: Vec::new(),
        })
    }

    pub fn scope(&self) -> ScopeHandle {
        self.scope.handle()
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub async fn load(&mut self) -> Result<DashboardStats, AppError> {
        let items = self.scope.run(self.records.list_all()).await??;
        self.items = items;
        Ok(self.stats())
    }

    pub async fn refresh(&mut self) -> Result<DashboardStats, AppError> {
        self.load().await
    }

    pub fn stats(&self) -> DashboardStats {
        stats::summarize(&self.items)
    }
}

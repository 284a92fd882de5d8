//! One controller per screen. Each owns its screen-local state and a
//! [`ScreenScope`](crate::scope::ScreenScope) that bounds its network calls.

pub mod dashboard;
pub mod history;
pub mod home;
pub mod login;

pub use dashboard::DashboardController;
pub use history::{EditDraft, HistoryController};
pub use home::HomeController;
pub use login::LoginController;

use zenflow_core::models::StressLevel;

use crate::error::AppError;

pub(crate) fn parse_level(value: u8) -> Result<StressLevel, AppError> {
    StressLevel::new(value).map_err(|_| {
        AppError::validation(format!(
            "Stress level must be between {} and {}.",
            StressLevel::MIN,
            StressLevel::MAX
        ))
    })
}

/// Trimmed notes, or `None` when nothing but whitespace was typed.
pub(crate) fn normalize_notes(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

use serde::{Deserialize, Serialize};

use super::level::StressLevel;
use super::timestamp;

/// One stress entry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(rename = "usuarioId")]
    pub owner_id: i64,
    #[serde(rename = "usuarioNome", default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Raw level as stored server-side. Expected in `1..=5` but not enforced.
    #[serde(rename = "nivelEstresse")]
    pub stress_level: i32,
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "data", with = "timestamp")]
    pub recorded_at: jiff::Timestamp,
}

impl Record {
    /// The validated level, or `None` when the server sent something out of range.
    pub fn level(&self) -> Option<StressLevel> {
        u8::try_from(self.stress_level)
            .ok()
            .and_then(|v| StressLevel::new(v).ok())
    }

    pub fn is_high_stress(&self) -> bool {
        matches!(self.stress_level, 4 | 5)
    }
}

/// Body for creating or replacing a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    #[serde(rename = "usuarioId")]
    pub owner_id: i64,
    #[serde(rename = "nivelEstresse")]
    pub stress_level: i32,
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

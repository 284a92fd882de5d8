pub mod level;
pub mod record;
pub mod timestamp;
pub mod tip;
pub mod user;

pub use level::StressLevel;
pub use record::{Record, RecordPayload};
pub use tip::Tip;
pub use user::{LoginRequest, User};

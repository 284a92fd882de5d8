//! zenflow-api
//!
//! Client for the ZenFlow REST service: configuration, the HTTP backend seam,
//! record CRUD and user endpoints. Every failure leaving this crate is an
//! [`error::ApiError`] carrying a display-ready message.

pub mod backend;
pub mod config;
pub mod error;
pub mod records;
pub mod users;

pub use backend::{ApiRequest, ApiResponse, HttpBackend, Method, ReqwestBackend, TransportFailure};
pub use config::{ApiConfig, Environment};
pub use error::ApiError;
pub use records::RecordClient;
pub use users::UserClient;

use thiserror::Error;

use crate::backend::TransportFailure;

pub const CONNECTION_ERROR_MESSAGE: &str =
    "Connection error. Check your internet connection and try again.";
pub const GENERIC_SERVER_MESSAGE: &str = "The server could not process the request.";
pub const UPDATE_UNAVAILABLE_MESSAGE: &str =
    "Editing records is not available on this server yet.";

/// Failures surfaced to callers of the API clients.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    ServerRejection { status: u16, message: String },

    /// The request went out but no response came back.
    #[error("Connection error. Check your internet connection and try again.")]
    Connectivity { detail: String },

    /// The request could not be built or sent. Carries the underlying error text.
    #[error("{0}")]
    RequestConstruction(String),

    /// The operation is intentionally unsupported by the configured backend.
    #[error("{0}")]
    NotImplemented(String),

    /// A success response whose body could not be decoded.
    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build a rejection from an error response, reading `detail` or
    /// `message` from a JSON body and falling back to a generic message.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = extract_message(body).unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string());
        Self::ServerRejection { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerRejection { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportFailure> for ApiError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::NoResponse(detail) => Self::Connectivity { detail },
            TransportFailure::Construction(cause) => Self::RequestConstruction(cause),
        }
    }
}

fn extract_message(body: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["detail", "message"]
        .into_iter()
        .filter_map(|field| json.get(field).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

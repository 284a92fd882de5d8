use thiserror::Error;
use zenflow_api::ApiError;
use zenflow_storage::error::StorageError;

/// Failures a screen presents to the user. `Display` is the dialog text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Could not access local storage: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Validation(String),

    #[error("This is a manager account. Use the manager login instead.")]
    ManagerAccount,

    #[error("This account has no manager access. Use the regular login instead.")]
    NotManager,

    #[error("You need to log in to continue.")]
    Unauthorized,

    #[error("The screen was closed before the request finished.")]
    Cancelled,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("Could not use the terminal: {0}")]
    Terminal(#[from] std::io::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Dialog title matching the failure kind.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Unauthorized => "Attention",
            Self::ManagerAccount | Self::NotManager => "Wrong login",
            _ => "Error",
        }
    }
}

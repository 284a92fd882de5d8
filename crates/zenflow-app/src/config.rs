use std::path::PathBuf;
use std::time::Duration;

use zenflow_api::{ApiConfig, Environment};

use crate::error::AppError;

/// Runtime settings, resolved from `ZENFLOW_*` environment variables on top
/// of the per-environment API defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, so tests can supply variables
    /// without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let environment = match lookup("ZENFLOW_ENV") {
            Some(raw) => raw.parse().map_err(AppError::Config)?,
            None => Environment::from_build(),
        };
        let mut api = ApiConfig::for_environment(environment);

        if let Some(url) = lookup("ZENFLOW_API_URL").filter(|u| !u.trim().is_empty()) {
            api.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup("ZENFLOW_API_TIMEOUT_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("ZENFLOW_API_TIMEOUT_MS={raw}: {e}")))?;
            api.timeout = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup("ZENFLOW_API_SUPPORTS_UPDATE") {
            api.supports_update = raw.trim().parse().map_err(|e| {
                AppError::Config(format!("ZENFLOW_API_SUPPORTS_UPDATE={raw}: {e}"))
            })?;
        }

        let data_dir = match lookup("ZENFLOW_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => zenflow_storage::file::default_dir()?,
        };

        Ok(Self {
            environment,
            api,
            data_dir,
        })
    }
}

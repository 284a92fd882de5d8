use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const DEVELOPMENT_BASE_URL: &str = "http://localhost:5281/api";
const PRODUCTION_BASE_URL: &str = "https://api.zenflow.com/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build environment the client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Development for debug builds, production for release builds.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Everything needed to construct a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: Vec<(String, String)>,
    /// False for backend revisions that have no record update endpoint.
    pub supports_update: bool,
}

impl ApiConfig {
    pub fn for_environment(env: Environment) -> Self {
        let base_url = match env {
            Environment::Development => DEVELOPMENT_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        };
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            supports_update: true,
        }
    }

    /// Join a relative endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::from_build())
    }
}

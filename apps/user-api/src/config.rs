use std::time::Duration;

use crate::constants::{CORS_ALLOWED_ORIGINS, MAX_BODY_SIZE_BYTES, REQUEST_TIMEOUT_SECS};

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let request_timeout_secs: u64 = std::env::var(REQUEST_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let max_body_size = std::env::var(MAX_BODY_SIZE_BYTES)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default.max_body_size);

        let cors_allowed_origins = std::env::var(CORS_ALLOWED_ORIGINS)
            .ok()
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_size,
            cors_allowed_origins,
        }
    }
}

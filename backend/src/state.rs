//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state
//! extraction. Read-only after startup.

use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// Cloned per request; the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Whether malformed measurements are rejected
    #[inline]
    pub fn strict_validation(&self) -> bool {
        self.config.calculator.strict_validation
    }
}

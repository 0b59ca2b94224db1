//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::clipboard_backend::ClipboardBackend;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub clipboard_backend: Option<String>,
    pub notify: Option<bool>,
    pub max_clippings: Option<usize>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            clipboard_backend: Some(ClipboardBackend::default().to_string()),
            notify: Some(false),
            max_clippings: Some(0),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            clipboard_backend: other.clipboard_backend.or(self.clipboard_backend),
            notify: other.notify.or(self.notify),
            max_clippings: other.max_clippings.or(self.max_clippings),
        }
    }

    /// Get the clipboard backend, or the default if not set/invalid
    pub fn clipboard_backend_or_default(&self) -> ClipboardBackend {
        self.clipboard_backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get the clipping limit, or 0 (unlimited) if not set
    pub fn max_clippings_or_default(&self) -> usize {
        self.max_clippings.unwrap_or(0)
    }
}

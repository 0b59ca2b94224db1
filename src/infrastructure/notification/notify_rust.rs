//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

use super::APP_NAME;

/// Display time for informational notifications
const INFO_TIMEOUT_MS: u32 = 3_000;
/// Failures stay up longer so they are not missed
const ERROR_TIMEOUT_MS: u32 = 8_000;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn timeout_ms(icon: NotificationIcon) -> u32 {
        match icon {
            NotificationIcon::Warning | NotificationIcon::Error => ERROR_TIMEOUT_MS,
            NotificationIcon::Info | NotificationIcon::Success => INFO_TIMEOUT_MS,
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let title = title.to_owned();
        let message = message.to_owned();
        let timeout = Timeout::Milliseconds(Self::timeout_ms(icon));

        // show() talks to the notification daemon and can block
        tokio::task::spawn_blocking(move || {
            Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .icon(icon.icon_name())
                .timeout(timeout)
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

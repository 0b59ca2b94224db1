//! notify-send notification adapter
//!
//! Fallback for Linux desktops where the D-Bus connection used by
//! notify-rust is unavailable.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

use super::APP_NAME;

/// notify-send notification adapter
pub struct NotifySendNotifier {
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    fn urgency(icon: NotificationIcon) -> &'static str {
        match icon {
            NotificationIcon::Error => "critical",
            _ => "normal",
        }
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let status = Command::new("notify-send")
            .args([
                "--app-name",
                &self.app_name,
                "--icon",
                icon.icon_name(),
                "--urgency",
                Self::urgency(icon),
                title,
                message,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_critical() {
        assert_eq!(NotifySendNotifier::urgency(NotificationIcon::Error), "critical");
        assert_eq!(NotifySendNotifier::urgency(NotificationIcon::Info), "normal");
    }
}

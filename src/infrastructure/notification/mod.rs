//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! with notify-send as the Linux fallback. Disabled notifications use a
//! no-op adapter.

mod fallback;
mod noop;
mod notify_rust;
mod notify_send;

pub use fallback::FallbackNotifier;
pub use noop::NoOpNotifier;
pub use self::notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::Notifier;

/// Application name shown by the notification daemon
pub const APP_NAME: &str = "Clipmaster 9000";

/// Create the notifier for the current settings
pub fn create_notifier(enabled: bool) -> Box<dyn Notifier> {
    if !enabled {
        return Box::new(NoOpNotifier::new());
    }

    if cfg!(target_os = "linux") {
        Box::new(FallbackNotifier::new(
            NotifyRustNotifier::new(),
            NotifySendNotifier::new(),
        ))
    } else {
        Box::new(NotifyRustNotifier::new())
    }
}

//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).
//!
//! One `arboard::Clipboard` is kept for the life of the adapter. On X11
//! the process only serves copied text while an instance is alive.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard {
    /// Opened on first use, dropped again after a failure
    clipboard: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self {
            clipboard: Arc::new(Mutex::new(None)),
        }
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
    }

    /// Run `op` against the shared instance, opening it if needed
    ///
    /// The instance is put back only when `op` succeeds.
    fn with_clipboard<T>(
        slot: &Mutex<Option<arboard::Clipboard>>,
        op: impl FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        let mut guard = slot
            .lock()
            .map_err(|_| ClipboardError::ClipboardUnavailable("clipboard lock poisoned".to_string()))?;

        let mut clipboard = match guard.take() {
            Some(clipboard) => clipboard,
            None => Self::open()?,
        };

        let result = op(&mut clipboard);
        if result.is_ok() {
            *guard = Some(clipboard);
        }
        result
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let slot = Arc::clone(&self.clipboard);

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            Self::with_clipboard(&slot, |clipboard| match clipboard.get_text() {
                Ok(text) => Ok(text),
                // Nothing (or nothing textual) on the clipboard
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
            })
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let slot = Arc::clone(&self.clipboard);
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            Self::with_clipboard(&slot, |clipboard| {
                clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_open(clipboard: &ArboardClipboard) -> bool {
        clipboard.clipboard.lock().unwrap().is_some()
    }

    #[test]
    fn clipboard_opens_lazily() {
        let clipboard = ArboardClipboard::new();
        assert!(!is_open(&clipboard));
    }

    #[test]
    fn clipboard_default_creates() {
        let clipboard = ArboardClipboard::default();
        assert!(!is_open(&clipboard));
    }

    #[test]
    fn failed_operation_leaves_slot_empty() {
        let slot = Mutex::new(None);
        let result: Result<(), _> = ArboardClipboard::with_clipboard(&slot, |_| {
            Err(ClipboardError::WriteFailed("refused".to_string()))
        });

        assert!(result.is_err());
        assert!(slot.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn instance_outlives_a_write() {
        // Needs a desktop session; nothing to check without one
        if arboard::Clipboard::new().is_err() {
            return;
        }

        let clipboard = ArboardClipboard::new();
        clipboard.write("vegan ham").await.unwrap();

        assert!(is_open(&clipboard));
        assert_eq!(clipboard.read().await.unwrap(), "vegan ham");
    }
}

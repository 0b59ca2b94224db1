//! In-process clipboard adapter
//!
//! Keeps the clipboard contents in memory. Clones share the same buffer,
//! so a test can hold one handle while the use case owns another.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Clipboard that never leaves the process
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    /// Create an empty memory clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory clipboard holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(text.into())),
        }
    }

    /// Replace the contents, as another application copying would
    pub fn set_text(&self, text: impl Into<String>) -> Result<(), ClipboardError> {
        let mut contents = self.lock()?;
        *contents = text.into();
        Ok(())
    }

    /// Current contents
    pub fn text(&self) -> Result<String, ClipboardError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, String>, ClipboardError> {
        self.contents
            .lock()
            .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.text()
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.set_text(text)
    }
}

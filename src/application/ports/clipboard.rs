//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install wl-clipboard.")]
    ToolNotFound(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read from clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Port for system clipboard access
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current text contents of the clipboard.
    ///
    /// # Returns
    /// The clipboard text; an empty clipboard reads as an empty string
    async fn read(&self) -> Result<String, ClipboardError>;

    /// Write text to the clipboard, replacing its current contents.
    ///
    /// # Arguments
    /// * `text` - The text to write
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write(text).await
    }
}

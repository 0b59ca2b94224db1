//! Wayland clipboard adapter using wl-copy / wl-paste

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

const WL_COPY: &str = "wl-copy";
const WL_PASTE: &str = "wl-paste";

/// Wayland clipboard adapter using the wl-clipboard tools
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }

    fn spawn_error(tool: &str, e: std::io::Error) -> ClipboardError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ClipboardError::ToolNotFound(tool.to_string())
        } else {
            ClipboardError::ClipboardUnavailable(e.to_string())
        }
    }

    /// wl-paste exits non-zero when the selection is empty
    fn is_empty_selection(stderr: &str) -> bool {
        let stderr = stderr.to_lowercase();
        stderr.contains("nothing is copied") || stderr.contains("no selection")
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let output = Command::new(WL_PASTE)
            .args(["--no-newline", "--type", "text"])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Self::spawn_error(WL_PASTE, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if Self::is_empty_selection(&stderr) {
                return Ok(String::new());
            }
            return Err(ClipboardError::ReadFailed(format!(
                "wl-paste exited with status: {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(WL_COPY)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Self::spawn_error(WL_COPY, e))?;

        // Write text to stdin, then close it so wl-copy takes ownership
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

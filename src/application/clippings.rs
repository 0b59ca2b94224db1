//! Clippings use case
//!
//! Owns the clipping store and wires it to the clipboard and notifier
//! ports. Each `on_*` method handles one UI event.

use thiserror::Error;

use crate::domain::clipping::{Clipping, ClippingId, ClippingStore};

use super::ports::{Clipboard, ClipboardError, NotificationIcon, Notifier};

/// Title used for notifications raised by the use case
pub const NOTIFICATION_TITLE: &str = "Clipmaster 9000";

/// Errors from the clippings use case
#[derive(Debug, Error)]
pub enum ClippingsError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Clipping list management backed by the system clipboard
pub struct ClippingsUseCase<C, N>
where
    C: Clipboard,
    N: Notifier,
{
    store: ClippingStore,
    clipboard: C,
    notifier: N,
}

impl<C, N> ClippingsUseCase<C, N>
where
    C: Clipboard,
    N: Notifier,
{
    /// Create a use case with an empty, unlimited store
    pub fn new(clipboard: C, notifier: N) -> Self {
        Self::with_store(ClippingStore::new(), clipboard, notifier)
    }

    /// Create a use case around an existing store
    pub fn with_store(store: ClippingStore, clipboard: C, notifier: N) -> Self {
        Self {
            store,
            clipboard,
            notifier,
        }
    }

    /// Clippings in display order (newest first)
    pub fn clippings(&self) -> &[Clipping] {
        self.store.list()
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &ClippingStore {
        &self.store
    }

    /// "Copy from Clipboard" was clicked: capture the live clipboard text.
    ///
    /// On a clipboard failure the store is left unchanged.
    pub async fn on_add_clicked(&mut self) -> Result<Clipping, ClippingsError> {
        let text = match self.clipboard.read().await {
            Ok(text) => text,
            Err(e) => return Err(self.report(e).await),
        };

        Ok(self.store.add_from_clipboard(&text))
    }

    /// "Remove" was clicked on a clipping. Unknown ids are ignored.
    pub fn on_remove_clicked(&mut self, id: ClippingId) -> Option<Clipping> {
        self.store.remove_id(id)
    }

    /// "Copy to Clipboard" was clicked on a clipping.
    ///
    /// Returns `Ok(None)` if the id is not in the store.
    pub async fn on_copy_clicked(
        &self,
        id: ClippingId,
    ) -> Result<Option<Clipping>, ClippingsError> {
        let Some(clipping) = self.store.get(id).cloned() else {
            return Ok(None);
        };

        self.copy_to_clipboard(&clipping).await?;
        Ok(Some(clipping))
    }

    /// Write the clipping's text to the clipboard, replacing whatever
    /// is there. The store is not touched.
    pub async fn copy_to_clipboard(&self, clipping: &Clipping) -> Result<(), ClippingsError> {
        if let Err(e) = self.clipboard.write(clipping.text()).await {
            return Err(self.report(e).await);
        }
        Ok(())
    }

    /// Surface a clipboard failure as a desktop notification
    async fn report(&self, error: ClipboardError) -> ClippingsError {
        // Notification failures must not mask the clipboard error
        let _ = self
            .notifier
            .notify(NOTIFICATION_TITLE, &error.to_string(), NotificationIcon::Error)
            .await;

        ClippingsError::Clipboard(error)
    }
}

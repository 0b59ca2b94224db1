//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, desktop notifications
//! and the config file.

pub mod clipboard;
pub mod config;
pub mod notification;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, MemoryClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NoOpNotifier, NotifyRustNotifier, NotifySendNotifier};

//! Application layer - Use cases and port interfaces
//!
//! Contains the clipping list operations and trait definitions
//! for external system interactions.

pub mod clippings;
pub mod ports;

// Re-export use cases
pub use clippings::{ClippingsError, ClippingsUseCase, NOTIFICATION_TITLE};

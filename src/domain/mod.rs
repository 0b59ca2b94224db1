//! Domain layer - Core business logic
//!
//! Contains the clipping entity, the clipping store, the configuration
//! value object and domain errors. This layer has no dependencies on
//! external systems.

pub mod clipping;
pub mod config;
pub mod error;

// Re-export common types
pub use clipping::{Clipping, ClippingId, ClippingStore};
pub use config::{AppConfig, ClipboardBackend};
pub use error::*;

//! Clipmaster 9000 - clipboard snippet manager
//!
//! Captures the system clipboard into a list of clippings, removes
//! entries, and copies an entry back onto the clipboard.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clipping entity, clipping store, configuration and errors
//! - **Application**: Clippings use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard, notify-rust, etc.)
//! - **CLI**: Argument parsing, presenter, and the single-window session

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

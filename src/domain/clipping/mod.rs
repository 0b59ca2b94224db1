//! Clipping domain module

mod entry;
mod store;

pub use entry::{Clipping, ClippingId};
pub use store::ClippingStore;

//! Clipping entity

use std::fmt;

/// Identifier of a clipping within its store.
///
/// Ids are handed out by the store in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClippingId(u64);

impl ClippingId {
    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClippingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A snapshot of clipboard text captured at one point in time.
///
/// The text cannot change after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipping {
    id: ClippingId,
    text: String,
}

impl Clipping {
    pub(crate) fn new(id: ClippingId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Get the clipping id
    pub fn id(&self) -> ClippingId {
        self.id
    }

    /// Get the captured text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Preview of the text for single-line display.
    ///
    /// Newlines are shown as `↵` and text longer than `max_chars`
    /// is cut off with a trailing `…`.
    pub fn preview(&self, max_chars: usize) -> String {
        let flattened: String = self
            .text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { '↵' } else { c })
            .collect();

        if flattened.chars().count() <= max_chars {
            return flattened;
        }

        let mut truncated: String = flattened.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

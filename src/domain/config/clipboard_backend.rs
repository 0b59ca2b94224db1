//! Clipboard backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// All available clipboard backends
const ALL_BACKENDS: &[ClipboardBackend] = &[
    ClipboardBackend::Arboard,
    ClipboardBackend::Wayland,
    ClipboardBackend::Memory,
];

/// Which adapter talks to the system clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipboardBackend {
    /// Cross-platform clipboard through arboard
    #[default]
    Arboard,
    /// wl-copy / wl-paste subprocesses
    Wayland,
    /// Process-local buffer, nothing leaves the process
    Memory,
}

impl ClipboardBackend {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
            Self::Memory => "memory",
        }
    }

    /// Names of all backends, for help and error messages
    pub fn names() -> Vec<&'static str> {
        ALL_BACKENDS.iter().map(|b| b.as_str()).collect()
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClipboardBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wayland" => Ok(Self::Wayland),
            "memory" => Ok(Self::Memory),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

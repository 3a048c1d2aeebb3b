//! Encoding tags for messages.

use std::fmt;

/// How a message carries its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// The whole event serialised as one payload under a declared format.
    Structured,
    /// Attributes mapped to transport metadata, payload carried separately.
    Binary,
    /// An already-materialised in-memory event.
    Event,
}

impl Encoding {
    /// Returns a lower-case name for logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Binary => "binary",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

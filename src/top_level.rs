//! The closed set of registered top-level types.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A top-level media type, the part before the `/`.
///
/// The set is fixed by RFC 6838 and is not extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopLevel {
    Application,
    Audio,
    Font,
    Example,
    Image,
    Message,
    Model,
    Multipart,
    Text,
    Video,
}

impl TopLevel {
    /// Every top-level type, in declaration order.
    pub const ALL: [TopLevel; 10] = [
        TopLevel::Application,
        TopLevel::Audio,
        TopLevel::Font,
        TopLevel::Example,
        TopLevel::Image,
        TopLevel::Message,
        TopLevel::Model,
        TopLevel::Multipart,
        TopLevel::Text,
        TopLevel::Video,
    ];

    /// Returns the wire token of this top-level type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TopLevel::Application => "application",
            TopLevel::Audio => "audio",
            TopLevel::Font => "font",
            TopLevel::Example => "example",
            TopLevel::Image => "image",
            TopLevel::Message => "message",
            TopLevel::Model => "model",
            TopLevel::Multipart => "multipart",
            TopLevel::Text => "text",
            TopLevel::Video => "video",
        }
    }

    /// Iterates over every top-level type, in declaration order.
    pub fn iter() -> impl Iterator<Item = TopLevel> {
        Self::ALL.into_iter()
    }

    /// Reports whether `s` is exactly one of the top-level tokens.
    ///
    /// Matching is case-sensitive.
    pub fn contains(s: &str) -> bool {
        Self::ALL.iter().any(|t| t.as_str() == s)
    }
}

impl fmt::Display for TopLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidTopLevel(s.to_string()))
    }
}

impl AsRef<str> for TopLevel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

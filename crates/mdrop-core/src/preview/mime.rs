use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared content type of fetched content, e.g. `text/plain`.
///
/// Stored as its essence: parameters dropped, ASCII lower-cased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(String);

impl MimeType {
    /// Parse a `Content-Type` header value. Blank values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let essence = raw.split(';').next().unwrap_or("").trim();
        if essence.is_empty() {
            return None;
        }
        Some(Self(essence.to_ascii_lowercase()))
    }

    pub fn image_png() -> Self {
        Self("image/png".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Top-level type, the part before `/`.
    pub fn top_level(&self) -> &str {
        self.0.split('/').next().unwrap_or("")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_parameters_and_case() {
        let mime = MimeType::parse("Text/Plain; charset=UTF-8").unwrap();
        assert_eq!(mime.as_str(), "text/plain");
        assert_eq!(mime.top_level(), "text");
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(MimeType::parse("").is_none());
        assert!(MimeType::parse("  ; charset=utf-8").is_none());
    }
}

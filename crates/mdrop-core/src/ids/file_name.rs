use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("file name must not be empty")]
    Empty,
}

/// Logical file name as shown to the user.
/// 面向用户的逻辑文件名，与存储路径和版本无关。
///
/// Never empty. Whitespace is kept verbatim because the server treats
/// names as opaque keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    pub fn new(name: impl Into<String>) -> Result<Self, FileNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FileNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Lower-cased extension after the last dot, if any.
    ///
    /// A leading dot (`.bashrc`) is not an extension.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.0.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

impl Display for FileName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FileName {
    type Error = FileNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for FileName {
    type Error = FileNameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_rejects_empty() {
        assert_eq!(FileName::new(""), Err(FileNameError::Empty));
    }

    #[test]
    fn test_file_name_keeps_value() {
        let name = FileName::new("report.pdf").unwrap();
        assert_eq!(name.as_str(), "report.pdf");
        assert_eq!(name.to_string(), "report.pdf");
    }

    #[test]
    fn test_extension_is_lowercased() {
        let name = FileName::new("Holiday.JPG").unwrap();
        assert_eq!(name.extension().as_deref(), Some("jpg"));
    }

    #[test]
    fn test_extension_missing_or_hidden_file() {
        assert_eq!(FileName::new("notes").unwrap().extension(), None);
        assert_eq!(FileName::new(".bashrc").unwrap().extension(), None);
        assert_eq!(FileName::new("trailing.").unwrap().extension(), None);
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        #[derive(Debug, Deserialize)]
        struct Listing {
            names: Vec<FileName>,
        }

        let parsed = toml::from_str::<Listing>(r#"names = ["a.txt", ""]"#);
        assert!(parsed.is_err());

        let parsed = toml::from_str::<Listing>(r#"names = ["a.txt", "b.md"]"#).unwrap();
        assert_eq!(parsed.names.len(), 2);
    }
}

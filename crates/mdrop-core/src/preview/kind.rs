use serde::{Deserialize, Serialize};

use super::MimeType;
use crate::FileName;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];
const PDF_EXTENSIONS: &[&str] = &["pdf"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "csv", "log"];

/// How a preview should be displayed.
/// 预览内容的展示类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Image,
    Audio,
    Pdf,
    Text,
    Unknown,
}

impl PreviewKind {
    /// Classify content by its declared type first, falling back to the
    /// file name's extension.
    pub fn classify(name: &FileName, declared: Option<&MimeType>) -> Self {
        declared
            .and_then(Self::from_mime)
            .unwrap_or_else(|| Self::from_name(name))
    }

    /// Kind implied by a declared content type, if it says anything useful.
    ///
    /// Generic types such as `application/octet-stream` return `None` so the
    /// caller can fall back to the extension.
    pub fn from_mime(mime: &MimeType) -> Option<Self> {
        match (mime.top_level(), mime.as_str()) {
            ("image", _) => Some(Self::Image),
            ("audio", _) => Some(Self::Audio),
            (_, "application/pdf") => Some(Self::Pdf),
            ("text", _) | (_, "application/json") => Some(Self::Text),
            _ => None,
        }
    }

    /// Kind implied by the extension alone. Matching is case-insensitive.
    pub fn from_name(name: &FileName) -> Self {
        let Some(ext) = name.extension() else {
            return Self::Unknown;
        };
        let ext = ext.as_str();
        if IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            Self::Audio
        } else if PDF_EXTENSIONS.contains(&ext) {
            Self::Pdf
        } else if TEXT_EXTENSIONS.contains(&ext) {
            Self::Text
        } else {
            Self::Unknown
        }
    }

    /// Short badge label. Unclassified content is shown as a plain `file`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Unknown => "file",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Image => "🖼️",
            Self::Audio => "🎵",
            Self::Pdf => "📄",
            Self::Text => "📝",
            Self::Unknown => "📦",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    #[test]
    fn test_pdf_without_content_type_uses_extension() {
        assert_eq!(PreviewKind::classify(&name("report.pdf"), None), PreviewKind::Pdf);
    }

    #[test]
    fn test_content_type_wins_over_missing_extension() {
        let mime = MimeType::parse("text/plain").unwrap();
        assert_eq!(
            PreviewKind::classify(&name("notes"), Some(&mime)),
            PreviewKind::Text
        );
        assert_eq!(PreviewKind::from_name(&name("notes")), PreviewKind::Unknown);
    }

    #[test]
    fn test_content_type_wins_over_conflicting_extension() {
        let mime = MimeType::parse("audio/mpeg").unwrap();
        assert_eq!(
            PreviewKind::classify(&name("track.txt"), Some(&mime)),
            PreviewKind::Audio
        );
    }

    #[test]
    fn test_generic_content_type_falls_back_to_extension() {
        let mime = MimeType::parse("application/octet-stream").unwrap();
        assert_eq!(
            PreviewKind::classify(&name("photo.JPEG"), Some(&mime)),
            PreviewKind::Image
        );
    }

    #[test]
    fn test_extension_table() {
        let cases = [
            ("a.svg", PreviewKind::Image),
            ("a.webp", PreviewKind::Image),
            ("a.ogg", PreviewKind::Audio),
            ("a.wav", PreviewKind::Audio),
            ("a.csv", PreviewKind::Text),
            ("a.log", PreviewKind::Text),
            ("a.json", PreviewKind::Text),
            ("a.zip", PreviewKind::Unknown),
            ("README", PreviewKind::Unknown),
        ];
        for (file, expected) in cases {
            assert_eq!(PreviewKind::from_name(&name(file)), expected, "{file}");
        }
    }

    #[test]
    fn test_unknown_label_is_file() {
        assert_eq!(PreviewKind::Unknown.label(), "file");
        assert_eq!(PreviewKind::Audio.label(), "audio");
    }
}

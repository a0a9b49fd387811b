use super::{ContentHandle, PreviewKind};
use crate::FileName;

/// State of the preview panel.
/// 预览面板的状态。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewResult {
    /// Nothing resolved yet.
    #[default]
    Pending,
    /// Content is available for display. May be an interim thumbnail.
    Ready {
        name: FileName,
        content: ContentHandle,
        kind: PreviewKind,
    },
    /// The primary fetch failed.
    Unavailable { name: FileName },
}

impl PreviewResult {
    pub fn name(&self) -> Option<&FileName> {
        match self {
            Self::Pending => None,
            Self::Ready { name, .. } | Self::Unavailable { name } => Some(name),
        }
    }

    pub fn kind(&self) -> Option<PreviewKind> {
        match self {
            Self::Ready { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let name = FileName::new("clip.mp3").unwrap();
        let ready = PreviewResult::Ready {
            name: name.clone(),
            content: ContentHandle::new(vec![0u8], None),
            kind: PreviewKind::Audio,
        };
        assert_eq!(ready.name(), Some(&name));
        assert_eq!(ready.kind(), Some(PreviewKind::Audio));

        let unavailable = PreviewResult::Unavailable { name: name.clone() };
        assert_eq!(unavailable.kind(), None);
        assert_eq!(PreviewResult::default(), PreviewResult::Pending);
        assert_eq!(PreviewResult::Pending.name(), None);
    }
}

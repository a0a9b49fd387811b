use bytes::Bytes;
use uuid::Uuid;

use super::MimeType;

/// Opaque reference to fetched content, ready to hand to a display.
/// 已获取内容的不透明引用，可直接交给展示层。
///
/// Cloning is cheap: the bytes are shared. Two handles are equal only when
/// they were produced by the same fetch.
#[derive(Debug, Clone)]
pub struct ContentHandle {
    id: Uuid,
    bytes: Bytes,
    mime_type: Option<MimeType>,
}

impl ContentHandle {
    pub fn new(bytes: impl Into<Bytes>, mime_type: Option<MimeType>) -> Self {
        Self {
            id: Uuid::new_v4(),
            bytes: bytes.into(),
            mime_type,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Content type declared by the source, if any.
    pub fn mime_type(&self) -> Option<&MimeType> {
        self.mime_type.as_ref()
    }
}

impl PartialEq for ContentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContentHandle {}

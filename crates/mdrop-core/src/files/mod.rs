//! File list rows.

use crate::{FileName, PreviewKind};

/// One row of the remote file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: FileName,
    /// Guessed from the extension only; the server is not asked.
    pub kind: PreviewKind,
}

impl FileEntry {
    pub fn new(name: FileName) -> Self {
        let kind = PreviewKind::from_name(&name);
        Self { name, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_guesses_kind_from_extension() {
        let entry = FileEntry::new(FileName::new("song.MP3").unwrap());
        assert_eq!(entry.kind, PreviewKind::Audio);
    }
}

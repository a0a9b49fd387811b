use crate::{FileName, RequestToken};

/// A request to preview one file.
///
/// Requests are never mutated; a newer request supersedes an older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub name: FileName,
    pub token: RequestToken,
}

impl PreviewRequest {
    pub fn new(name: FileName, token: RequestToken) -> Self {
        Self { name, token }
    }
}

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::FetchError;
use crate::{ContentHandle, FileName};

/// Source of file content for previews.
/// 预览内容来源端口。
#[async_trait]
pub trait FileContentSourcePort: Send + Sync {
    /// Fetch the full content of `name`.
    ///
    /// Implementations must resolve promptly with [`FetchError::Cancelled`]
    /// once `cancel` fires, and must not hang.
    async fn fetch(
        &self,
        name: &FileName,
        cancel: CancellationToken,
    ) -> Result<ContentHandle, FetchError>;

    /// Fetch a lightweight thumbnail. Best effort: every failure is `None`.
    async fn fetch_thumbnail(&self, name: &FileName) -> Option<ContentHandle>;
}

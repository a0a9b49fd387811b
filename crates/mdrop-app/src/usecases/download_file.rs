use anyhow::{Context, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use mdrop_core::ports::FileContentSourcePort;
use mdrop_core::{ContentHandle, FileName};

/// Fetch the full content of a single file for saving.
/// 下载单个文件的完整内容。
pub struct DownloadFileUseCase {
    source: Arc<dyn FileContentSourcePort>,
}

impl DownloadFileUseCase {
    pub fn new(source: Arc<dyn FileContentSourcePort>) -> Self {
        Self { source }
    }

    #[tracing::instrument(name = "usecase.files.download.execute", skip(self, name, cancel), fields(file = %name))]
    pub async fn execute(&self, name: &FileName, cancel: CancellationToken) -> Result<ContentHandle> {
        let content = self
            .source
            .fetch(name, cancel)
            .await
            .with_context(|| format!("failed to download {name}"))?;

        tracing::info!(bytes = content.len(), "Downloaded file");
        Ok(content)
    }
}

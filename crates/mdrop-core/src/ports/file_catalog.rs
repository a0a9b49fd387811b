use anyhow::Result;
use async_trait::async_trait;

use crate::FileName;

/// Listing of the user's files on the remote service.
#[async_trait]
pub trait FileCatalogPort: Send + Sync {
    async fn list_files(&self) -> Result<Vec<FileName>>;
}

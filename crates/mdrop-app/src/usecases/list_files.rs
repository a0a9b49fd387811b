use anyhow::{Context, Result};
use std::sync::Arc;

use mdrop_core::ports::FileCatalogPort;
use mdrop_core::FileEntry;

/// List the user's files as display rows.
/// 列出用户文件，作为列表行。
pub struct ListFilesUseCase {
    catalog: Arc<dyn FileCatalogPort>,
}

impl ListFilesUseCase {
    pub fn new(catalog: Arc<dyn FileCatalogPort>) -> Self {
        Self { catalog }
    }

    /// Rows are returned in the order the server lists them.
    #[tracing::instrument(name = "usecase.files.list.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<FileEntry>> {
        let names = self
            .catalog
            .list_files()
            .await
            .context("failed to list remote files")?;

        tracing::debug!(count = names.len(), "Listed remote files");
        Ok(names.into_iter().map(FileEntry::new).collect())
    }
}

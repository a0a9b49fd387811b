use std::path::{Path, PathBuf};

use anyhow::Context;
use mdrop_core::FileName;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::bootstrap::AppDeps;

/// Where to save `name` when `--out` is not given: its last path component,
/// in the current directory.
pub fn output_path(name: &FileName, out: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(out) = out {
        return Ok(out);
    }
    Path::new(name.as_str())
        .file_name()
        .map(PathBuf::from)
        .with_context(|| format!("cannot derive a local file name from '{name}', use --out"))
}

/// Download a file and write it to disk. Ctrl-C aborts the transfer.
#[tracing::instrument(name = "command.download_file", skip(deps, out))]
pub async fn download_file(
    deps: &AppDeps,
    name: String,
    out: Option<PathBuf>,
) -> anyhow::Result<PathBuf> {
    let name = FileName::new(name)?;
    let path = output_path(&name, out)?;

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };
    let result = deps.download_file.execute(&name, cancel).await;
    interrupt.abort();
    let content = result?;

    tokio::fs::write(&path, content.bytes())
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(file = %name, path = %path.display(), bytes = content.len(), "Download saved");
    println!("Saved {} ({} bytes) to {}", name, content.len(), path.display());
    Ok(path)
}

//! Preview dock: a passive observer of the preview store.
//!
//! 预览面板：只读地监听预览状态并打印到终端。

use std::io::Write;

use mdrop_core::{PreviewKind, PreviewResult};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub const IDLE_LINE: &str = "Hover or select a file to preview";
pub const LOADING_LINE: &str = "Loading preview…";
pub const NO_PREVIEW: &str = "No preview available";

/// One-line rendering of a preview state.
pub fn render_preview_line(result: &PreviewResult) -> String {
    match result {
        PreviewResult::Pending => IDLE_LINE.to_string(),
        PreviewResult::Ready {
            name,
            kind: PreviewKind::Unknown,
            ..
        } => format!("[{}] {name}: {NO_PREVIEW}", PreviewKind::Unknown.label()),
        PreviewResult::Ready {
            name,
            content,
            kind,
        } => format!("[{}] {name} ({} bytes)", kind.label(), content.len()),
        PreviewResult::Unavailable { name } => format!("{name}: {NO_PREVIEW}"),
    }
}

pub struct PreviewDock<W> {
    updates: watch::Receiver<PreviewResult>,
    out: W,
}

impl<W: Write> PreviewDock<W> {
    pub fn new(updates: watch::Receiver<PreviewResult>, out: W) -> Self {
        Self { updates, out }
    }

    /// Print the current state, then every change until `shutdown` fires or
    /// the store goes away. Returns the writer.
    ///
    /// Intermediate states may be skipped when several arrive at once; only
    /// the latest one is printed.
    pub async fn run(mut self, shutdown: CancellationToken) -> W {
        let initial = render_preview_line(&self.updates.borrow_and_update());
        self.print(&initial);

        loop {
            tokio::select! {
                biased;
                changed = self.updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let line = render_preview_line(&self.updates.borrow_and_update());
                    self.print(&line);
                }
                _ = shutdown.cancelled() => break,
            }
        }

        self.out
    }

    fn print(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!(error = %err, "Preview dock failed to write");
        }
    }
}

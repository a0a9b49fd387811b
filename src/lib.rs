//! Mini Dropbox client library
//!
//! 迷你网盘客户端：文件列表、下载与悬停预览。

use clap::Parser;

pub use mdrop_core::{FileName, PreviewKind, PreviewResult};
pub use mdrop_term::{run_app, Cli, Command};

/// Parse process arguments and run the selected command.
pub fn run() -> anyhow::Result<()> {
    run_app(Cli::parse())
}

//! Command handlers, one per subcommand.

pub mod download;
pub mod list;
pub mod preview;

use crate::bootstrap::AppDeps;
use crate::cli::Command;

pub async fn dispatch(command: Command, deps: AppDeps) -> anyhow::Result<()> {
    match command {
        Command::List => list::list_files(&deps).await,
        Command::Preview => preview::preview_loop(&deps).await,
        Command::Download { name, out } => {
            download::download_file(&deps, name, out).await.map(|_| ())
        }
    }
}

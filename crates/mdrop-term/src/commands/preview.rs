//! Interactive preview session.
//!
//! Reads commands from stdin, one per line:
//!
//! ```text
//! hover <name>
//! select <name>
//! quit
//! ```
//!
//! Hovers go through the debounce, selects resolve right away. The dock
//! prints whatever the coordinator publishes.

use mdrop_core::FileName;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::bootstrap::AppDeps;
use crate::dock::{PreviewDock, LOADING_LINE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewInput {
    Hover(FileName),
    Select(FileName),
    Quit,
    Blank,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command {0:?}, expected hover <name>, select <name> or quit")]
    UnknownCommand(String),
    #[error("{0} needs a file name")]
    MissingName(&'static str),
}

/// Parse one input line. The file name is everything after the first
/// whitespace run, so names may contain spaces.
pub fn parse_input(line: &str) -> Result<PreviewInput, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(PreviewInput::Blank);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let file = |verb: &'static str| FileName::new(rest).map_err(|_| InputError::MissingName(verb));

    match command {
        "hover" => file("hover").map(PreviewInput::Hover),
        "select" => file("select").map(PreviewInput::Select),
        "quit" | "exit" => Ok(PreviewInput::Quit),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

#[tracing::instrument(name = "command.preview", skip_all)]
pub async fn preview_loop(deps: &AppDeps) -> anyhow::Result<()> {
    let (handle, coordinator) = deps.start_preview();

    let shutdown = CancellationToken::new();
    let dock = PreviewDock::new(deps.preview_store.subscribe(), std::io::stdout());
    let dock_task = tokio::spawn(dock.run(shutdown.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let sent = match parse_input(&line) {
            Ok(PreviewInput::Hover(name)) => handle.on_hover(name),
            Ok(PreviewInput::Select(name)) => {
                println!("{LOADING_LINE}");
                handle.on_select(name)
            }
            Ok(PreviewInput::Quit) => break,
            Ok(PreviewInput::Blank) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        if let Err(err) = sent {
            warn!(error = %err, "Preview coordinator stopped early");
            break;
        }
    }

    debug!("Preview session ending");
    drop(handle);
    if let Err(err) = coordinator.await {
        warn!(error = %err, "Preview coordinator task failed");
    }
    shutdown.cancel();
    if let Err(err) = dock_task.await {
        warn!(error = %err, "Preview dock task failed");
    }
    Ok(())
}

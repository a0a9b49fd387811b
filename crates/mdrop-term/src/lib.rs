//! # mdrop-term
//!
//! Terminal integration layer for the Mini Dropbox preview client.
//!
//! This crate provides:
//! - Bootstrap (tracing, config loading, dependency wiring)
//! - CLI command handlers (`list`, `preview`, `download`)
//! - The preview dock, a passive observer of the preview store
//!
//! ## Modules
//!
//! - **bootstrap**: process setup and assembly of adapters into use cases
//! - **cli**: clap argument definitions
//! - **commands**: one handler per subcommand
//! - **dock**: renders preview state changes to the terminal

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod dock;

pub use bootstrap::run_app;
pub use cli::{Cli, Command};

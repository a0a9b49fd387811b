//! # mdrop-core
//!
//! Core domain models and port definitions for the Mini Dropbox preview client.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.
//! Everything that talks to the network or to a display lives behind a port.

pub mod config;
pub mod files;
pub mod ids;
pub mod ports;
pub mod preview;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use files::FileEntry;
pub use ids::{FileName, FileNameError, RequestToken};
pub use preview::{ContentHandle, MimeType, PreviewKind, PreviewRequest, PreviewResult};

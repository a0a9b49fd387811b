//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations (HTTP client, preview store). This follows Hexagonal
//! Architecture principles, keeping the preview logic independent of the
//! transport and of whatever ends up displaying the result.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `mdrop-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a capability the client needs from outside?**
//! 2. **Will it be depended upon by more than one use case?**
//! 3. **Is it implemented by the infrastructure or terminal layer?**
//!
//! If all three answers are **yes**, place it in `mdrop-core/ports`.

pub mod errors;
mod file_catalog;
mod file_content_source;
mod preview_sink;

pub use errors::FetchError;
pub use file_catalog::FileCatalogPort;
pub use file_content_source::FileContentSourcePort;
pub use preview_sink::PreviewSinkPort;

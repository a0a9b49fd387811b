pub mod http;
pub mod preview;

pub use http::{HttpFileService, HttpFileServiceConfig, HttpFileServiceError};
pub use preview::PreviewStore;

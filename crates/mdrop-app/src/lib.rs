//! Mini Dropbox Application Orchestration Layer
//!
//! This crate contains the client use cases: the hover-preview coordinator,
//! file listing and single-file download.

pub mod usecases;

pub use usecases::preview::{
    CoordinatorClosed, PreviewCoordinator, PreviewHandle, PreviewTrigger, DEFAULT_DEBOUNCE,
};
pub use usecases::{DownloadFileUseCase, ListFilesUseCase};

//! HTTP adapter for the remote file service.
//! 远程文件服务的 HTTP 适配器。

mod file_service;

pub use file_service::{HttpFileService, HttpFileServiceConfig, HttpFileServiceError};

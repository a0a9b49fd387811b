pub mod download_file;
pub mod list_files;
pub mod preview;

pub use download_file::DownloadFileUseCase;
pub use list_files::ListFilesUseCase;

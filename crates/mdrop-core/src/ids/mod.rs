//! ID type wrappers for type safety.

pub mod file_name;
pub mod request_token;

pub use file_name::{FileName, FileNameError};
pub use request_token::RequestToken;

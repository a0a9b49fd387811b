//! Preview domain: what a preview request is, what it resolves to,
//! and how fetched content is classified for display.
//! 预览领域模型：请求、结果与内容类型判定。

mod content;
mod kind;
mod mime;
mod request;
mod result;

pub use content::ContentHandle;
pub use kind::PreviewKind;
pub use mime::MimeType;
pub use request::PreviewRequest;
pub use result::PreviewResult;

use crate::PreviewResult;

/// Channel the preview display observes.
///
/// `publish` is fire-and-forget and must never block the caller; it is
/// invoked from the coordinator's event loop.
pub trait PreviewSinkPort: Send + Sync {
    fn publish(&self, result: PreviewResult);
}

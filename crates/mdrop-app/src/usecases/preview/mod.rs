//! Hover-preview scheduling.
//! 悬停预览调度。

mod coordinator;

pub use coordinator::{
    CoordinatorClosed, PreviewCoordinator, PreviewHandle, PreviewTrigger, DEFAULT_DEBOUNCE,
};

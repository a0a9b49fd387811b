mod store;

pub use store::PreviewStore;

use mdrop_core::ports::PreviewSinkPort;
use mdrop_core::PreviewResult;
use tokio::sync::watch;

/// Latest-value holder for the preview pane.
///
/// 预览面板的最新状态。观察者只关心最新的值，中间状态可以被跳过。
pub struct PreviewStore {
    tx: watch::Sender<PreviewResult>,
}

impl PreviewStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PreviewResult::Pending);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<PreviewResult> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> PreviewResult {
        self.tx.borrow().clone()
    }
}

impl Default for PreviewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSinkPort for PreviewStore {
    fn publish(&self, result: PreviewResult) {
        // send_replace stores the value even when nobody is subscribed
        self.tx.send_replace(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdrop_core::{ContentHandle, FileName, PreviewKind};

    fn ready(name: &str) -> PreviewResult {
        PreviewResult::Ready {
            name: FileName::new(name).unwrap(),
            content: ContentHandle::new(b"x".to_vec(), None),
            kind: PreviewKind::Text,
        }
    }

    #[test]
    fn test_starts_pending() {
        let store = PreviewStore::new();
        assert_eq!(store.current(), PreviewResult::Pending);
    }

    #[test]
    fn test_publish_without_subscribers_is_kept() {
        let store = PreviewStore::new();
        store.publish(ready("a.txt"));
        assert_eq!(store.current().name().map(|n| n.as_str()), Some("a.txt"));
    }

    #[tokio::test]
    async fn test_subscriber_sees_latest_value() {
        let store = PreviewStore::new();
        let mut rx = store.subscribe();

        store.publish(ready("a.txt"));
        store.publish(PreviewResult::Unavailable {
            name: FileName::new("b.txt").unwrap(),
        });

        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow_and_update(),
            PreviewResult::Unavailable {
                name: FileName::new("b.txt").unwrap()
            }
        );
    }
}

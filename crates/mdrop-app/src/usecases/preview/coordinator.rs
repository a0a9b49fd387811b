//! Preview coordinator: debounces row hovers, cancels superseded fetches and
//! publishes the newest preview to the sink.
//! 预览协调器：对悬停去抖、取消过期请求，并发布最新的预览结果。
//!
//! The coordinator runs as a single task. It is the only writer of the
//! current request token and of the live cancellation token; fetches run in
//! their own tasks and report back over a channel, tagged with the token of
//! the request that issued them. Outcomes carrying any other token are
//! dropped, whatever order the network completes them in.

use std::sync::Arc;
use std::time::Duration;

use mdrop_core::ports::{FetchError, FileContentSourcePort, PreviewSinkPort};
use mdrop_core::{ContentHandle, FileName, PreviewKind, PreviewRequest, PreviewResult, RequestToken};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, debug_span, warn, Instrument};

/// Quiet period a hover must survive before its preview is fetched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(120);

/// Input events from the file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewTrigger {
    /// Pointer entered a row. Debounced.
    Hover(FileName),
    /// Row was clicked. Resolved immediately.
    Select(FileName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("preview coordinator has stopped")]
pub struct CoordinatorClosed;

/// Cheap, cloneable front door to a running [`PreviewCoordinator`].
///
/// Sending never blocks. The coordinator stops once every handle is dropped.
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    triggers: mpsc::UnboundedSender<PreviewTrigger>,
}

impl PreviewHandle {
    pub fn on_hover(&self, name: FileName) -> Result<(), CoordinatorClosed> {
        self.send(PreviewTrigger::Hover(name))
    }

    pub fn on_select(&self, name: FileName) -> Result<(), CoordinatorClosed> {
        self.send(PreviewTrigger::Select(name))
    }

    pub fn send(&self, trigger: PreviewTrigger) -> Result<(), CoordinatorClosed> {
        self.triggers.send(trigger).map_err(|_| CoordinatorClosed)
    }
}

enum FetchOutcome {
    Thumbnail {
        token: RequestToken,
        content: ContentHandle,
    },
    Primary {
        token: RequestToken,
        result: Result<ContentHandle, FetchError>,
    },
}

struct ScheduledHover {
    name: FileName,
    deadline: Instant,
}

struct ActiveRequest {
    request: PreviewRequest,
    cancel: CancellationToken,
    /// Primary fetch has reported back.
    settled: bool,
}

pub struct PreviewCoordinator {
    source: Arc<dyn FileContentSourcePort>,
    sink: Arc<dyn PreviewSinkPort>,
    debounce: Duration,
    triggers: mpsc::UnboundedReceiver<PreviewTrigger>,
    outcomes_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    last_token: RequestToken,
    scheduled: Option<ScheduledHover>,
    active: Option<ActiveRequest>,
}

impl PreviewCoordinator {
    pub fn new(
        source: Arc<dyn FileContentSourcePort>,
        sink: Arc<dyn PreviewSinkPort>,
        debounce: Duration,
    ) -> (Self, PreviewHandle) {
        let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();

        let coordinator = Self {
            source,
            sink,
            debounce,
            triggers: trigger_rx,
            outcomes_tx,
            outcomes_rx,
            last_token: RequestToken::initial(),
            scheduled: None,
            active: None,
        };

        (coordinator, PreviewHandle { triggers: trigger_tx })
    }

    /// Build a coordinator and run it on the current tokio runtime.
    pub fn spawn(
        source: Arc<dyn FileContentSourcePort>,
        sink: Arc<dyn PreviewSinkPort>,
        debounce: Duration,
    ) -> (PreviewHandle, JoinHandle<()>) {
        let (coordinator, handle) = Self::new(source, sink, debounce);
        (handle, tokio::spawn(coordinator.run()))
    }

    /// Run the event loop until every [`PreviewHandle`] is dropped.
    /// 运行事件循环，直到所有句柄被释放。
    #[tracing::instrument(name = "usecase.preview.coordinator.run", skip_all)]
    pub async fn run(mut self) {
        debug!(
            debounce_ms = self.debounce.as_millis() as u64,
            "Preview coordinator started"
        );

        loop {
            let deadline = self.scheduled.as_ref().map(|hover| hover.deadline);

            tokio::select! {
                biased;

                trigger = self.triggers.recv() => match trigger {
                    Some(trigger) => self.on_trigger(trigger),
                    None => break,
                },
                Some(outcome) = self.outcomes_rx.recv() => self.on_outcome(outcome),
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.fire_scheduled();
                }
            }
        }

        self.cancel_active();
        debug!("Preview coordinator stopped");
    }

    fn on_trigger(&mut self, trigger: PreviewTrigger) {
        match trigger {
            PreviewTrigger::Hover(name) => {
                if let Some(previous) = self.scheduled.take() {
                    debug!(file = %previous.name, "Pending hover replaced");
                }
                debug!(file = %name, "Hover scheduled");
                self.scheduled = Some(ScheduledHover {
                    name,
                    deadline: Instant::now() + self.debounce,
                });
            }
            PreviewTrigger::Select(name) => {
                if let Some(previous) = self.scheduled.take() {
                    debug!(file = %previous.name, "Pending hover discarded by select");
                }
                self.resolve(name);
            }
        }
    }

    fn fire_scheduled(&mut self) {
        if let Some(hover) = self.scheduled.take() {
            debug!(file = %hover.name, "Hover debounce elapsed");
            self.resolve(hover.name);
        }
    }

    fn resolve(&mut self, name: FileName) {
        self.cancel_active();

        self.last_token = self.last_token.next();
        let request = PreviewRequest::new(name, self.last_token);
        let cancel = CancellationToken::new();
        debug!(file = %request.name, token = %request.token, "Resolving preview");

        self.spawn_thumbnail(&request);
        self.spawn_primary(&request, cancel.clone());

        self.active = Some(ActiveRequest {
            request,
            cancel,
            settled: false,
        });
    }

    fn cancel_active(&mut self) {
        if let Some(active) = self.active.take() {
            if !active.settled {
                debug!(
                    file = %active.request.name,
                    token = %active.request.token,
                    "Cancelling in-flight fetch"
                );
            }
            active.cancel.cancel();
        }
    }

    fn spawn_thumbnail(&self, request: &PreviewRequest) {
        let source = Arc::clone(&self.source);
        let outcomes = self.outcomes_tx.clone();
        let name = request.name.clone();
        let token = request.token;
        let span = debug_span!("usecase.preview.thumbnail", file = %name, token = %token);

        tokio::spawn(
            async move {
                if let Some(content) = source.fetch_thumbnail(&name).await {
                    let _ = outcomes.send(FetchOutcome::Thumbnail { token, content });
                }
            }
            .instrument(span),
        );
    }

    fn spawn_primary(&self, request: &PreviewRequest, cancel: CancellationToken) {
        let source = Arc::clone(&self.source);
        let outcomes = self.outcomes_tx.clone();
        let name = request.name.clone();
        let token = request.token;
        let span = debug_span!("usecase.preview.fetch", file = %name, token = %token);

        tokio::spawn(
            async move {
                let result = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(FetchError::Cancelled),
                    result = source.fetch(&name, cancel.clone()) => result,
                };
                let _ = outcomes.send(FetchOutcome::Primary { token, result });
            }
            .instrument(span),
        );
    }

    fn on_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Thumbnail { token, content } => {
                let Some(active) = self
                    .active
                    .as_ref()
                    .filter(|active| active.request.token == token)
                else {
                    debug!(token = %token, "Dropping thumbnail of superseded request");
                    return;
                };
                if active.settled {
                    debug!(token = %token, "Dropping thumbnail that arrived after full content");
                    return;
                }

                debug!(file = %active.request.name, token = %token, "Publishing interim thumbnail");
                let result = PreviewResult::Ready {
                    name: active.request.name.clone(),
                    content,
                    kind: PreviewKind::Image,
                };
                self.sink.publish(result);
            }
            FetchOutcome::Primary { token, result } => {
                let Some(active) = self
                    .active
                    .as_mut()
                    .filter(|active| active.request.token == token)
                else {
                    debug!(token = %token, "Dropping result of superseded request");
                    return;
                };
                active.settled = true;
                let name = active.request.name.clone();

                match result {
                    Ok(content) => {
                        let kind = PreviewKind::classify(&name, content.mime_type());
                        debug!(
                            file = %name,
                            token = %token,
                            kind = kind.label(),
                            bytes = content.len(),
                            "Publishing preview"
                        );
                        self.sink.publish(PreviewResult::Ready {
                            name,
                            content,
                            kind,
                        });
                    }
                    Err(FetchError::Cancelled) => {
                        debug!(file = %name, token = %token, "Fetch cancelled");
                    }
                    Err(err) => {
                        warn!(file = %name, token = %token, error = %err, "Preview unavailable");
                        self.sink.publish(PreviewResult::Unavailable { name });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EmptySource;

    #[async_trait]
    impl FileContentSourcePort for EmptySource {
        async fn fetch(
            &self,
            _name: &FileName,
            _cancel: CancellationToken,
        ) -> Result<ContentHandle, FetchError> {
            Ok(ContentHandle::new(Vec::<u8>::new(), None))
        }

        async fn fetch_thumbnail(&self, _name: &FileName) -> Option<ContentHandle> {
            None
        }
    }

    #[derive(Default)]
    struct NullSink {
        published: Mutex<Vec<PreviewResult>>,
    }

    impl PreviewSinkPort for NullSink {
        fn publish(&self, result: PreviewResult) {
            self.published.lock().unwrap().push(result);
        }
    }

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_handle_reports_closed_after_coordinator_stops() {
        let (handle, join) = PreviewCoordinator::spawn(
            Arc::new(EmptySource),
            Arc::new(NullSink::default()),
            DEFAULT_DEBOUNCE,
        );
        join.abort();
        let _ = join.await;

        assert_eq!(handle.on_hover(name("a.txt")), Err(CoordinatorClosed));
        assert_eq!(handle.on_select(name("a.txt")), Err(CoordinatorClosed));
    }

    #[tokio::test]
    async fn test_coordinator_stops_when_handles_dropped() {
        let (handle, join) = PreviewCoordinator::spawn(
            Arc::new(EmptySource),
            Arc::new(NullSink::default()),
            DEFAULT_DEBOUNCE,
        );
        let second = handle.clone();
        drop(handle);
        drop(second);

        tokio::time::timeout(Duration::from_secs(1), join)
            .await
            .expect("coordinator should stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_select_publishes_without_waiting_for_debounce() {
        tokio::time::pause();
        let sink = Arc::new(NullSink::default());
        let (handle, _join) = PreviewCoordinator::spawn(
            Arc::new(EmptySource),
            sink.clone(),
            Duration::from_secs(3600),
        );

        handle.on_select(name("notes.md")).unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;

        let published = sink.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].kind(), Some(PreviewKind::Text));
    }
}

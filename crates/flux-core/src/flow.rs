//! Flow: stream frio de resultado único devolvido por `ProcessorChain::process`
//!
//! Um `Flow` guarda a receita de uma execução, não o resultado. Cada inscrição
//! começa uma execução nova no primeiro poll; nada é compartilhado entre
//! inscritos.
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream};
use futures::{Future, FutureExt, StreamExt};
use std::sync::Arc;

use crate::error::{StageError, StageResult};

/// Stream produced by one subscription: a single `Ok` value or a single `Err`,
/// then the end of the stream.
pub type FlowStream<O> = BoxStream<'static, StageResult<O>>;

type RunFactory<O> = dyn Fn() -> BoxFuture<'static, StageResult<O>> + Send + Sync;

pub struct Flow<O> {
    factory: Arc<RunFactory<O>>,
}

impl<O: Send + 'static> Flow<O> {
    pub(crate) fn new<F, Fut>(run: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StageResult<O>> + Send + 'static,
    {
        let factory: Arc<RunFactory<O>> = Arc::new(move || run().boxed());
        Self { factory }
    }

    /// Start a subscription. The run begins on the first poll of the stream.
    pub fn subscribe(&self) -> FlowStream<O> {
        let factory = Arc::clone(&self.factory);
        stream::once(async move { factory().await }).boxed()
    }

    /// Drive one subscription to its end, reporting to `observer`.
    ///
    /// On success `on_next` is followed by `on_complete`; on failure only
    /// `on_error` is called.
    pub async fn observe<Obs: Observer<O>>(&self, mut observer: Obs) -> Obs {
        let mut events = self.subscribe();
        while let Some(event) = events.next().await {
            match event {
                Ok(value) => observer.on_next(value),
                Err(err) => {
                    observer.on_error(err);
                    return observer;
                }
            }
        }
        observer.on_complete();
        observer
    }
}

impl<O> Clone for Flow<O> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

/// Callback-style consumer of a `Flow`.
///
/// `on_error` has no default: every observer decides what a failed run means
/// to it, so a failure can never vanish silently.
///
/// ```compile_fail
/// use flux_core::Observer;
///
/// struct OnlyValues(Vec<u32>);
///
/// impl Observer<u32> for OnlyValues {
///     fn on_next(&mut self, value: u32) {
///         self.0.push(value);
///     }
/// }
/// ```
///
/// ```
/// use flux_core::{Observer, StageError};
///
/// struct Values {
///     seen: Vec<u32>,
///     failures: Vec<String>,
/// }
///
/// impl Observer<u32> for Values {
///     fn on_next(&mut self, value: u32) {
///         self.seen.push(value);
///     }
///
///     fn on_error(&mut self, error: StageError) {
///         self.failures.push(error.to_string());
///     }
/// }
/// ```
pub trait Observer<T> {
    fn on_next(&mut self, value: T);

    fn on_error(&mut self, error: StageError);

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Observer<u32> for Recorder {
        fn on_next(&mut self, value: u32) {
            self.events.push(format!("next:{}", value));
        }

        fn on_error(&mut self, error: StageError) {
            self.events.push(format!("error:{}", error));
        }

        fn on_complete(&mut self) {
            self.events.push("complete".to_string());
        }
    }

    #[tokio::test]
    async fn test_nothing_runs_before_poll() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let flow = Flow::new(move || {
            let counter = Arc::clone(&counter);
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) as u32) }
        });

        let stream = flow.subscribe();
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        let values: Vec<_> = stream.collect().await;
        assert_eq!(values.len(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_observer_success_sequence() {
        let flow = Flow::new(|| async { Ok(84u32) });
        let recorder = flow.observe(Recorder::default()).await;
        assert_eq!(recorder.events, vec!["next:84", "complete"]);
    }

    /// Keeps the default `on_complete`; errors must still reach it.
    #[derive(Default)]
    struct NoCompletion {
        values: Vec<u32>,
        errors: Vec<String>,
    }

    impl Observer<u32> for NoCompletion {
        fn on_next(&mut self, value: u32) {
            self.values.push(value);
        }

        fn on_error(&mut self, error: StageError) {
            self.errors.push(error.to_string());
        }
    }

    #[tokio::test]
    async fn test_minimal_observer_still_receives_failure() {
        let flow = Flow::new(|| async { Err::<u32, _>(StageError::failed("stage 2 exploded")) });
        let seen = flow.observe(NoCompletion::default()).await;

        assert!(seen.values.is_empty());
        assert_eq!(seen.errors, vec!["STAGE/EXEC: stage 2 exploded"]);
    }

    #[tokio::test]
    async fn test_observer_error_sequence() {
        let flow = Flow::new(|| async { Err::<u32, _>(StageError::failed("nope")) });
        let recorder = flow.observe(Recorder::default()).await;
        assert_eq!(recorder.events, vec!["error:STAGE/EXEC: nope"]);
    }
}

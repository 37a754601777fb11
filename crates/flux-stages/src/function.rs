use async_trait::async_trait;
use flux_core::{Stage, StageResult};
use std::future::Future;
use std::marker::PhantomData;

/// Stage backed by a fallible async closure. Build one with [`stage_fn`].
pub struct AsyncFnStage<I, O, F> {
    f: F,
    name: &'static str,
    _types: PhantomData<fn(I) -> O>,
}

impl<I, O, F> AsyncFnStage<I, O, F> {
    /// Label used in log fields instead of the closure's type name.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

/// Wrap an async closure as a stage.
///
/// ```ignore
/// let lookup = stage_fn(|id: u64| async move {
///     repo.find(id).await.map_err(StageError::from)
/// });
/// ```
pub fn stage_fn<I, O, F, Fut>(f: F) -> AsyncFnStage<I, O, F>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = StageResult<O>>,
{
    AsyncFnStage {
        f,
        name: "fn",
        _types: PhantomData,
    }
}

#[async_trait]
impl<I, O, F, Fut> Stage<I, O> for AsyncFnStage<I, O, F>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = StageResult<O>> + Send + 'static,
{
    async fn execute(&self, input: I) -> StageResult<O> {
        (self.f)(input).await
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flux_core::StageError;

    #[tokio::test]
    async fn test_async_closure_stage() {
        let stage = stage_fn(|n: u32| async move {
            tokio::task::yield_now().await;
            Ok::<_, StageError>(n * 3)
        });
        assert_eq!(stage.execute(5).await.unwrap(), 15);
    }

    #[tokio::test]
    async fn test_anyhow_errors_convert() {
        let stage = stage_fn(|s: String| async move {
            let n: u32 = s.parse().map_err(anyhow::Error::from)?;
            Ok::<_, StageError>(n)
        })
        .named("parse");

        assert_eq!(Stage::<String, u32>::name(&stage), "parse");
        let err = stage.execute("x".to_string()).await.unwrap_err();
        assert!(matches!(err, StageError::Other(_)));
    }
}

//! Stage Trait: Contrato único para todos os estágios
use async_trait::async_trait;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{StageError, StageResult};

/// One asynchronous processing step: exactly one `I` in, exactly one `O` out,
/// or a failure that ends the current run.
///
/// A stage keeps no per-run state. The same instance can serve any number of
/// runs, and wrapped in an `Arc` it can be added to several pipelines.
#[async_trait]
pub trait Stage<I: Send + 'static, O: Send + 'static>: Send + Sync {
    /// Executa o estágio sobre um único valor
    async fn execute(&self, input: I) -> StageResult<O>;

    /// Nome usado nos campos de log
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[async_trait]
impl<I, O, S> Stage<I, O> for Arc<S>
where
    I: Send + 'static,
    O: Send + 'static,
    S: Stage<I, O> + ?Sized,
{
    async fn execute(&self, input: I) -> StageResult<O> {
        (**self).execute(input).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<I, O, S> Stage<I, O> for Box<S>
where
    I: Send + 'static,
    O: Send + 'static,
    S: Stage<I, O> + ?Sized,
{
    async fn execute(&self, input: I) -> StageResult<O> {
        (**self).execute(input).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

pub(crate) type AnyValue = Box<dyn Any + Send>;

/// Uniform view of a stage as stored inside a pipeline.
#[async_trait]
pub(crate) trait ErasedStage: Send + Sync {
    async fn execute_any(&self, input: AnyValue) -> StageResult<AnyValue>;

    fn name(&self) -> &str;
}

struct StageAdapter<S, I, O> {
    stage: S,
    _types: PhantomData<fn(I) -> O>,
}

#[async_trait]
impl<S, I, O> ErasedStage for StageAdapter<S, I, O>
where
    S: Stage<I, O>,
    I: Send + 'static,
    O: Send + 'static,
{
    async fn execute_any(&self, input: AnyValue) -> StageResult<AnyValue> {
        let input = input
            .downcast::<I>()
            .map_err(|_| StageError::TypeMismatch {
                stage: self.stage.name().to_string(),
                expected: std::any::type_name::<I>(),
            })?;
        let output = self.stage.execute(*input).await?;
        Ok(Box::new(output))
    }

    fn name(&self) -> &str {
        self.stage.name()
    }
}

pub(crate) fn erase<S, I, O>(stage: S) -> Arc<dyn ErasedStage>
where
    S: Stage<I, O> + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    Arc::new(StageAdapter {
        stage,
        _types: PhantomData,
    })
}

/// Recovers the concrete output of a finished run.
pub(crate) fn downcast_output<O: Send + 'static>(value: AnyValue, pipeline: &str) -> StageResult<O> {
    value
        .downcast::<O>()
        .map(|output| *output)
        .map_err(|_| StageError::OutputMismatch {
            pipeline: pipeline.to_string(),
            expected: std::any::type_name::<O>(),
        })
}

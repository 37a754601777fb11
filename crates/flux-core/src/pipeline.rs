//! Pipeline Sequencial: aguarda um único valor final
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::RunContext;
use crate::error::StageResult;
use crate::options::PipelineOptions;
use crate::runner::run_stages;
use crate::stage::{downcast_output, erase, ErasedStage, Stage};

/// Ordered composition of stages from `I` to `O`.
///
/// Every `add_stage` consumes the handle and returns one whose output type is
/// the new stage's output type, so a stage whose input does not match the
/// current output is rejected at compile time.
///
/// ```
/// use async_trait::async_trait;
/// use flux_core::{Pipeline, Stage, StageResult};
///
/// struct Length;
///
/// #[async_trait]
/// impl Stage<String, usize> for Length {
///     async fn execute(&self, input: String) -> StageResult<usize> {
///         Ok(input.len())
///     }
/// }
///
/// struct Double;
///
/// #[async_trait]
/// impl Stage<usize, usize> for Double {
///     async fn execute(&self, input: usize) -> StageResult<usize> {
///         Ok(input * 2)
///     }
/// }
///
/// let pipeline = Pipeline::<String>::new().add_stage(Length).add_stage(Double);
/// let output = futures::executor::block_on(pipeline.execute("abc".to_string())).unwrap();
/// assert_eq!(output, 6);
/// ```
pub struct Pipeline<I, O = I> {
    stages: Vec<Arc<dyn ErasedStage>>,
    options: PipelineOptions,
    _types: PhantomData<fn(I) -> O>,
}

impl<I: Send + 'static> Pipeline<I> {
    /// Create an empty pipeline. Executing it returns the input unchanged.
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Pipeline {
            stages: Vec::new(),
            options,
            _types: PhantomData,
        }
    }
}

impl<I, O> Pipeline<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Append a stage that consumes the current output type.
    ///
    /// After a `String -> usize` stage the pipeline yields `usize`, so a
    /// stage expecting `String` no longer fits:
    ///
    /// ```compile_fail
    /// use async_trait::async_trait;
    /// use flux_core::{Pipeline, Stage, StageResult};
    ///
    /// struct Length;
    ///
    /// #[async_trait]
    /// impl Stage<String, usize> for Length {
    ///     async fn execute(&self, input: String) -> StageResult<usize> {
    ///         Ok(input.len())
    ///     }
    /// }
    ///
    /// struct Shout;
    ///
    /// #[async_trait]
    /// impl Stage<String, String> for Shout {
    ///     async fn execute(&self, input: String) -> StageResult<String> {
    ///         Ok(input.to_uppercase())
    ///     }
    /// }
    ///
    /// let _pipeline = Pipeline::<String>::new().add_stage(Length).add_stage(Shout);
    /// ```
    pub fn add_stage<N, S>(mut self, stage: S) -> Pipeline<I, N>
    where
        N: Send + 'static,
        S: Stage<O, N> + 'static,
    {
        self.stages.push(erase(stage));
        Pipeline {
            stages: self.stages,
            options: self.options,
            _types: PhantomData,
        }
    }

    /// Run every stage in insertion order.
    ///
    /// Returns the last stage's output, or the first failure unchanged.
    /// Runs are independent, so one pipeline may serve overlapping calls.
    pub async fn execute(&self, input: I) -> StageResult<O> {
        let ctx = RunContext::new(&self.options);
        let output = run_stages(&self.stages, Box::new(input), ctx).await?;
        downcast_output(output, &self.options.name)
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }
}

impl<I: Send + 'static> Default for Pipeline<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for Pipeline<I, O> {
    fn clone(&self) -> Self {
        Pipeline {
            stages: self.stages.clone(),
            options: self.options.clone(),
            _types: PhantomData,
        }
    }
}

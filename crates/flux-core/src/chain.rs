//! Processor Chain: mesma composição do `Pipeline`, resultado entregue como `Flow`
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::RunContext;
use crate::flow::Flow;
use crate::options::PipelineOptions;
use crate::runner::run_stages;
use crate::stage::{downcast_output, erase, ErasedStage, Stage};

pub struct ProcessorChain<I, O = I> {
    processors: Vec<Arc<dyn ErasedStage>>,
    options: PipelineOptions,
    _types: PhantomData<fn(I) -> O>,
}

impl<I: Send + 'static> ProcessorChain<I> {
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        ProcessorChain {
            processors: Vec::new(),
            options,
            _types: PhantomData,
        }
    }
}

impl<I, O> ProcessorChain<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Append a processor that consumes the current output type.
    ///
    /// ```
    /// use async_trait::async_trait;
    /// use flux_core::{ProcessorChain, Stage, StageResult};
    /// use futures::StreamExt;
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
    /// let chain = ProcessorChain::<String>::new().add_processor(Length);
    /// let events: Vec<_> =
    ///     futures::executor::block_on(chain.process("abcd".to_string()).subscribe().collect());
    /// assert_eq!(*events[0].as_ref().unwrap(), 4);
    /// ```
    ///
    /// A processor whose input is not the current output type is rejected:
    ///
    /// ```compile_fail
    /// use async_trait::async_trait;
    /// use flux_core::{ProcessorChain, Stage, StageResult};
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
    /// let _chain = ProcessorChain::<String>::new().add_processor(Length).add_processor(Shout);
    /// ```
    pub fn add_processor<N, S>(mut self, processor: S) -> ProcessorChain<I, N>
    where
        N: Send + 'static,
        S: Stage<O, N> + 'static,
    {
        self.processors.push(erase(processor));
        ProcessorChain {
            processors: self.processors,
            options: self.options,
            _types: PhantomData,
        }
    }

    /// Prepare a run over `input` without starting it.
    ///
    /// Each subscription to the returned flow runs every processor from the
    /// beginning on its own copy of `input`.
    pub fn process(&self, input: I) -> Flow<O>
    where
        I: Clone + Sync,
    {
        let processors: Arc<[Arc<dyn ErasedStage>]> = self.processors.iter().cloned().collect();
        let options = self.options.clone();

        Flow::new(move || {
            let processors = Arc::clone(&processors);
            let input = input.clone();
            let ctx = RunContext::new(&options);
            let name = options.name.clone();

            async move {
                let output = run_stages(&processors, Box::new(input), ctx).await?;
                downcast_output(output, &name)
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }
}

impl<I: Send + 'static> Default for ProcessorChain<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for ProcessorChain<I, O> {
    fn clone(&self) -> Self {
        ProcessorChain {
            processors: self.processors.clone(),
            options: self.options.clone(),
            _types: PhantomData,
        }
    }
}

use async_trait::async_trait;
use flux_core::{Stage, StageResult};
use std::marker::PhantomData;

/// Applies a caller-supplied mapping function to the input.
///
/// The stage never fails on its own; a panic inside the function is not
/// caught.
pub struct TransformationStage<I, O, F> {
    transform: F,
    _types: PhantomData<fn(I) -> O>,
}

impl<I, O, F> TransformationStage<I, O, F>
where
    F: Fn(I) -> O,
{
    pub fn new(transform: F) -> Self {
        Self {
            transform,
            _types: PhantomData,
        }
    }
}

impl<I, O, F: Clone> Clone for TransformationStage<I, O, F> {
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone(),
            _types: PhantomData,
        }
    }
}

#[async_trait]
impl<I, O, F> Stage<I, O> for TransformationStage<I, O, F>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> O + Send + Sync,
{
    async fn execute(&self, input: I) -> StageResult<O> {
        Ok((self.transform)(input))
    }

    fn name(&self) -> &str {
        "transformation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_applies_function() {
        let stage = TransformationStage::new(|v: i64| v * 2);
        assert_eq!(stage.execute(42).await.unwrap(), 84);
    }

    #[tokio::test]
    async fn test_changes_type() {
        let stage = TransformationStage::new(|s: String| s.split(',').count());
        assert_eq!(stage.execute("a,b,c".to_string()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_reusable_across_calls() {
        let stage = TransformationStage::new(|v: u8| v.saturating_add(1));
        assert_eq!(stage.execute(1).await.unwrap(), 2);
        assert_eq!(stage.execute(255).await.unwrap(), 255);
    }
}

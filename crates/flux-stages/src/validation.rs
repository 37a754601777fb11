use async_trait::async_trait;
use flux_core::{Stage, StageError, StageResult};
use std::fmt;
use std::marker::PhantomData;

use crate::presence::Presence;

pub const INVALID_INPUT_MESSAGE: &str = "input must not be null or undefined";

/// Passes the value through unchanged, failing with
/// `StageError::InvalidInput` when it is absent (see [`Presence`]).
pub struct ValidationStage<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> ValidationStage<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ValidationStage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ValidationStage<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ValidationStage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidationStage")
    }
}

#[async_trait]
impl<T> Stage<T, T> for ValidationStage<T>
where
    T: Presence + Send + 'static,
{
    async fn execute(&self, input: T) -> StageResult<T> {
        if !input.is_present() {
            return Err(StageError::invalid_input(INVALID_INPUT_MESSAGE));
        }
        Ok(input)
    }

    fn name(&self) -> &str {
        "validation"
    }
}

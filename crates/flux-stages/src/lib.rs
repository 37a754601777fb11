//! Flux Stages: reference implementations of the `Stage` contract.
//!
//! These stages stay intentionally small. They cover the two steps almost
//! every pipeline starts with (reject empty input, then map it) and act as
//! templates for bespoke stages.
//!
//! # Pipeline Flow
//!
//! ```text
//! Input → Validation → Transformation → Output
//!            ↓               ↓
//!      InvalidInput      f(input)
//! ```

mod function;
mod presence;
mod transformation;
mod validation;

pub use function::{stage_fn, AsyncFnStage};
pub use presence::Presence;
pub use transformation::TransformationStage;
pub use validation::{ValidationStage, INVALID_INPUT_MESSAGE};

use flux_core::{Pipeline, ProcessorChain};

/// Create a pipeline that validates its input and then maps it with `transform`.
pub fn validate_then<I, O, F>(transform: F) -> Pipeline<I, O>
where
    I: Presence + Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> O + Send + Sync + 'static,
{
    Pipeline::new()
        .add_stage(ValidationStage::<I>::new())
        .add_stage(TransformationStage::new(transform))
}

/// Chain counterpart of [`validate_then`].
pub fn validate_then_chain<I, O, F>(transform: F) -> ProcessorChain<I, O>
where
    I: Presence + Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> O + Send + Sync + 'static,
{
    ProcessorChain::new()
        .add_processor(ValidationStage::<I>::new())
        .add_processor(TransformationStage::new(transform))
}

//! Run Context: identidade de uma única passagem pela lista de estágios
use uuid::Uuid;

use crate::options::PipelineOptions;

#[derive(Debug, Clone)]
pub(crate) struct RunContext {
    pub pipeline: String,
    pub run_id: Uuid,
    pub trace_stages: bool,
}

impl RunContext {
    pub fn new(options: &PipelineOptions) -> Self {
        Self {
            pipeline: options.name.clone(),
            run_id: Uuid::new_v4(),
            trace_stages: options.trace_stages,
        }
    }
}

//! Pipeline Runner: encadeia estágios para `Pipeline` e `ProcessorChain`
//!
//! Passa um único valor pela lista de estágios na ordem de inserção,
//! aguardando cada estágio antes do próximo. A primeira falha encerra a
//! execução e volta intacta; os estágios seguintes nunca rodam.
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info_span, warn, Instrument};

use crate::context::RunContext;
use crate::error::StageResult;
use crate::stage::{AnyValue, ErasedStage};

pub(crate) async fn run_stages(
    stages: &[Arc<dyn ErasedStage>],
    input: AnyValue,
    ctx: RunContext,
) -> StageResult<AnyValue> {
    let span = info_span!(
        "flux.run",
        pipeline = %ctx.pipeline,
        run_id = %ctx.run_id,
        stages = stages.len() as u64
    );

    async move {
        let run_start = Instant::now();
        let mut current = input;

        for (index, stage) in stages.iter().enumerate() {
            let start = Instant::now();
            match stage.execute_any(current).await {
                Ok(output) => {
                    if ctx.trace_stages {
                        debug!(
                            index = index as u64,
                            stage = stage.name(),
                            latency_ms = start.elapsed().as_millis() as u64,
                            "stage completed"
                        );
                    }
                    current = output;
                }
                Err(err) => {
                    warn!(
                        index = index as u64,
                        stage = stage.name(),
                        error = %err,
                        "stage failed, aborting run"
                    );
                    return Err(err);
                }
            }
        }

        debug!(
            latency_ms = run_start.elapsed().as_millis() as u64,
            "run completed"
        );
        Ok(current)
    }
    .instrument(span)
    .await
}

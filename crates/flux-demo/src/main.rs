//! Binary entrypoint running the pipeline and processor-chain walkthroughs.
mod logging;

use flux_core::{Observer, Pipeline, PipelineOptions, ProcessorChain, StageError};
use flux_stages::{Presence, TransformationStage, ValidationStage};
use serde::Serialize;
use std::env::VarError;
use tracing::{error, info};

#[derive(Debug, Clone, Serialize)]
struct DataItem {
    id: String,
    value: i64,
}

impl Presence for DataItem {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputData {
    id: String,
    processed_value: i64,
}

/// Logs every notification of a flow, the way a subscriber callback would.
struct LogObserver;

impl Observer<OutputData> for LogObserver {
    fn on_next(&mut self, value: OutputData) {
        info!(result = %to_json(&value), "processed");
    }

    fn on_error(&mut self, err: StageError) {
        error!(error = %err, "processing failed");
    }

    fn on_complete(&mut self) {
        info!("processing complete");
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
}

const OPTIONS_ENV: &str = "FLUX_OPTIONS";

/// Options come from the YAML file named by FLUX_OPTIONS, when set.
fn load_options(default_name: &str) -> anyhow::Result<PipelineOptions> {
    options_from_env(std::env::var(OPTIONS_ENV), default_name)
}

fn options_from_env(
    var: Result<String, VarError>,
    default_name: &str,
) -> anyhow::Result<PipelineOptions> {
    match var {
        Ok(path) => Ok(PipelineOptions::from_path(path)?),
        Err(VarError::NotPresent) => Ok(PipelineOptions::named(default_name)),
        Err(err @ VarError::NotUnicode(_)) => {
            Err(anyhow::Error::new(err).context(format!("{} is not a usable path", OPTIONS_ENV)))
        }
    }
}

async fn run_pipeline() -> anyhow::Result<()> {
    let pipeline = Pipeline::<DataItem>::with_options(load_options("pipeline-example")?)
        .add_stage(ValidationStage::<DataItem>::new())
        .add_stage(TransformationStage::new(|data: DataItem| DataItem {
            value: data.value * 2,
            ..data
        }));

    let input = DataItem {
        id: "123".to_string(),
        value: 42,
    };
    info!(input = %to_json(&input), "running pipeline");

    let result = pipeline.execute(input).await?;
    info!(result = %to_json(&result), "pipeline finished");
    Ok(())
}

async fn run_chain() -> anyhow::Result<()> {
    let chain = ProcessorChain::<DataItem>::with_options(load_options("processor-chain-example")?)
        .add_processor(ValidationStage::<DataItem>::new())
        .add_processor(TransformationStage::new(|input: DataItem| OutputData {
            id: input.id,
            processed_value: input.value * 2,
        }));

    let input = DataItem {
        id: "123".to_string(),
        value: 42,
    };
    info!(input = %to_json(&input), "running processor chain");

    chain.process(input).observe(LogObserver).await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("info");
    info!(version = flux_core::FLUX_VERSION, "flux demo");

    run_pipeline().await?;
    run_chain().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_unset_variable_uses_defaults() {
        let options = options_from_env(Err(VarError::NotPresent), "demo").unwrap();
        assert_eq!(options.name, "demo");
    }

    #[test]
    fn test_non_unicode_variable_is_an_error() {
        let err = options_from_env(Err(VarError::NotUnicode(OsString::from("bad"))), "demo")
            .unwrap_err();
        assert!(err.to_string().contains("FLUX_OPTIONS"));
    }

    #[test]
    fn test_missing_options_file_is_an_error() {
        let result = options_from_env(Ok("/nonexistent/flux.yaml".to_string()), "demo");
        assert!(result.is_err());
    }
}

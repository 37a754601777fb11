//! Unified Error Model
use thiserror::Error;

/// Failure raised by a stage. The runners forward it to the caller unchanged.
#[derive(Error, Debug)]
pub enum StageError {
    #[error("STAGE/INPUT: invalid input: {0}")]
    InvalidInput(String),

    #[error("STAGE/EXEC: {0}")]
    Failed(String),

    /// A type-erased value did not hold the type the next stage expected.
    #[error("STAGE/TYPE: stage '{stage}' expected a value of type {expected}")]
    TypeMismatch {
        stage: String,
        expected: &'static str,
    },

    /// The finished run did not hold the pipeline's declared output type.
    #[error("PIPELINE/TYPE: pipeline '{pipeline}' produced no value of type {expected}")]
    OutputMismatch {
        pipeline: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

pub type StageResult<T> = Result<T, StageError>;

/// Errors outside of a pipeline run (loading options).
#[derive(Error, Debug)]
pub enum FluxError {
    #[error("CONFIG/{0}")]
    Config(String),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),

    #[error("YAML/{0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = StageError::invalid_input("value is null");
        assert_eq!(err.to_string(), "STAGE/INPUT: invalid input: value is null");

        let err = StageError::failed("boom");
        assert_eq!(err.to_string(), "STAGE/EXEC: boom");

        let err = FluxError::Config("name must not be empty".to_string());
        assert_eq!(err.to_string(), "CONFIG/name must not be empty");
    }

    #[test]
    fn test_anyhow_is_transparent() {
        let err: StageError = anyhow::anyhow!("upstream timed out").into();
        assert_eq!(err.to_string(), "upstream timed out");
        assert!(matches!(err, StageError::Other(_)));
    }
}

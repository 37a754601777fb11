//! Pipeline Options
//!
//! Ajustes opcionais de um pipeline ou chain. Nada aqui muda o que uma
//! execução calcula; as opções só afetam como as execuções aparecem nos logs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FluxError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Name recorded on the `flux.run` span
    pub name: String,

    /// Emit a debug event with the latency of every completed stage
    pub trace_stages: bool,
}

impl PipelineOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load options from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, FluxError> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FluxError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    fn validate(&self) -> Result<(), FluxError> {
        if self.name.trim().is_empty() {
            return Err(FluxError::Config("name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            name: "pipeline".to_string(),
            trace_stages: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PipelineOptions::default();
        assert_eq!(options.name, "pipeline");
        assert!(options.trace_stages);
    }

    #[test]
    fn test_from_yaml_partial() {
        let options = PipelineOptions::from_yaml("name: orders\n").unwrap();
        assert_eq!(options.name, "orders");
        assert!(options.trace_stages);

        let options = PipelineOptions::from_yaml("name: orders\ntrace_stages: false\n").unwrap();
        assert!(!options.trace_stages);
    }

    #[test]
    fn test_from_yaml_rejects_blank_name() {
        let err = PipelineOptions::from_yaml("name: '  '\n").unwrap_err();
        assert!(matches!(err, FluxError::Config(_)));
    }

    #[test]
    fn test_from_yaml_rejects_bad_type() {
        let err = PipelineOptions::from_yaml("trace_stages: [1, 2]\n").unwrap_err();
        assert!(matches!(err, FluxError::Yaml(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PipelineOptions::from_path("/nonexistent/flux-options.yaml").unwrap_err();
        assert!(matches!(err, FluxError::Io(_)));
    }
}

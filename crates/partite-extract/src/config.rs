use partite_core::{ErrorInfo, PartiteError, ProgressConfig};
use serde::{Deserialize, Serialize};

/// JSON-configurable parameters of a partite extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtractionConfig {
    /// Minimum edge count assumed for the input; defaults to `num_edges()`.
    #[serde(default)]
    pub min_edges: Option<f64>,
    /// Fixed witness-set size `t`; derived from the density when absent.
    #[serde(default)]
    pub witness_size: Option<usize>,
    /// Progress reporting for the degree and base-case scans.
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl ExtractionConfig {
    /// Parses a configuration from JSON, filling omitted fields with defaults.
    pub fn from_json(input: &str) -> Result<Self, PartiteError> {
        serde_json::from_str(input).map_err(|err| {
            PartiteError::Serde(
                ErrorInfo::new("config-parse", "failed to parse extraction config")
                    .with_context("reason", err),
            )
        })
    }

    /// Sets the assumed minimum edge count.
    pub fn with_min_edges(mut self, min_edges: f64) -> Self {
        self.min_edges = Some(min_edges);
        self
    }

    /// Fixes the witness-set size.
    pub fn with_witness_size(mut self, witness_size: usize) -> Self {
        self.witness_size = Some(witness_size);
        self
    }

    /// Replaces the progress reporting.
    pub fn with_progress(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }
}

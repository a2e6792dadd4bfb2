//! Run summary: counts and header of one annotation run, written as JSON
//!
//! Before writing, the summary is checked against the JSON Schema generated
//! from [`RunSummary`] itself. The check always runs in debug builds; release
//! builds run it when `MAFANNO_VALIDATE_OUTPUT=1` and only warn on mismatch.

use std::fs::File;
use std::sync::LazyLock;

use jsonschema::Validator;
use log::warn;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AnnotateError, Result};
use crate::pipeline::{FailureCounters, RunContext};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RunSummary {
    /// mafanno version
    pub version: String,

    /// Source MAF path
    pub source: String,

    /// Number of annotated records handed to the writer
    pub records_written: usize,

    /// Number of leading comment lines carried over
    pub comment_lines: usize,

    /// Final output header
    pub header: Vec<String>,

    /// Annotation gap counts
    pub failures: FailureCounters,
}

/// Compiled once; `Err` holds the reason the derived schema could not be compiled.
static SUMMARY_VALIDATOR: LazyLock<std::result::Result<Validator, String>> = LazyLock::new(|| {
    let schema = serde_json::to_value(schema_for!(RunSummary))
        .map_err(|e| format!("Failed to serialize summary schema: {}", e))?;
    jsonschema::validator_for(&schema).map_err(|e| format!("Failed to compile summary schema: {}", e))
});

fn validation_enabled() -> bool {
    cfg!(debug_assertions)
        || std::env::var("MAFANNO_VALIDATE_OUTPUT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
}

/// Schema violations of a summary document, one `<path>: <reason>` entry each
fn summary_schema_errors(value: &Value) -> Vec<String> {
    match &*SUMMARY_VALIDATOR {
        Ok(validator) => validator
            .iter_errors(value)
            .map(|e| format!("{}: {}", e.instance_path, e))
            .collect(),
        Err(msg) => vec![msg.clone()],
    }
}

impl RunSummary {
    pub fn from_context(context: &RunContext, records_written: usize) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            source: context.source.clone(),
            records_written,
            comment_lines: context.comment_lines.len(),
            header: context.header.to_vec(),
            failures: context.failures,
        }
    }

    /// Check this summary against the schema derived from `RunSummary`.
    pub fn check_schema(&self) -> Result<()> {
        let value = serde_json::to_value(self).map_err(|e| AnnotateError::Output(e.to_string()))?;
        let errors = summary_schema_errors(&value);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AnnotateError::SummarySchema {
                source_path: self.source.clone(),
                errors,
            })
        }
    }

    /// Write this summary to a JSON file
    pub fn write_json(&self, path: &str) -> Result<()> {
        if validation_enabled()
            && let Err(e) = self.check_schema()
        {
            warn!("Not a valid run summary for {}: {}", path, e);
            if cfg!(debug_assertions) {
                return Err(e);
            }
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(|e| AnnotateError::Output(e.to_string()))
    }

    #[cfg(test)]
    fn load_json(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| AnnotateError::Open {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_reader(file).map_err(|e| AnnotateError::Output(e.to_string()))
    }
}

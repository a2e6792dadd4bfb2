//! Error types for mafanno

use thiserror::Error;

/// Result type alias for mafanno operations
pub type Result<T> = std::result::Result<T, AnnotateError>;

/// Fatal errors that abort an annotation run.
///
/// Annotation gaps (an annotator call that succeeds but produces no HGVSc/HGVSp)
/// are not errors; they are counted in [`crate::pipeline::FailureCounters`].
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Source file could not be opened
    #[error("Error opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data line whose field count does not match the declared header
    #[error("Malformed MAF line {line} (expected {expected} fields, got {actual})")]
    FieldCount {
        /// 1-based physical line number in the source file
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Declared header lacks a column every record must carry
    #[error("Required column {0} missing from MAF header")]
    MissingColumn(String),

    /// Lookup of a required field on a record that does not have it
    #[error("Record is missing required field {0}")]
    MissingField(String),

    /// The annotation mechanism itself failed
    #[error("Annotation failed: {0}")]
    Annotation(String),

    /// Invalid run configuration or annotation table
    #[error("Invalid configuration {path}: {msg}")]
    Config { path: String, msg: String },

    /// Summary serialization failure
    #[error("Output error: {0}")]
    Output(String),

    /// Run summary does not match the schema derived from `RunSummary`
    #[error("Run summary for {source_path} failed schema validation:\n{}", .errors.join("\n"))]
    SummarySchema {
        source_path: String,
        errors: Vec<String>,
    },
}

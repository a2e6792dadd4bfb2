//! Annotation run: comment extraction, table loading, annotation and header aggregation.
//!
//! [`AnnotationRunner::run`] does all the work up front and returns an
//! [`AnnotationRun`]: the [`RunContext`] a writer needs plus a
//! [`RecordCursor`] over the annotated records.

pub mod failures;
pub mod orchestrator;

pub use failures::{FailureCause, FailureCounters, MITOCHONDRIAL_CHROMOSOME};
pub use orchestrator::{
    AnnotationOutcome, AnnotationParams, annotate_records, classify_failure, failure_message,
};

use log::info;

use crate::annotator::Annotator;
use crate::config::RunConfig;
use crate::error::Result;
use crate::maf::{extract_comments, load_table};
use crate::output::{OutputHeader, RecordCursor};

/// State published by a run for the writer stage. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Path of the source MAF
    pub source: String,
    /// Leading `#` lines, verbatim and in order
    pub comment_lines: Vec<String>,
    pub header: OutputHeader,
    pub failures: FailureCounters,
}

/// Result of [`AnnotationRunner::run`]
#[derive(Debug)]
pub struct AnnotationRun {
    pub context: RunContext,
    pub records: RecordCursor,
}

impl AnnotationRun {
    pub fn into_parts(self) -> (RunContext, RecordCursor) {
        (self.context, self.records)
    }
}

pub struct AnnotationRunner {
    maf_path: String,
    params: AnnotationParams,
}

impl AnnotationRunner {
    pub fn new(maf_path: &str) -> Self {
        Self {
            maf_path: maf_path.to_string(),
            params: AnnotationParams::new(false, ""),
        }
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.params.replace = replace;
        self
    }

    pub fn with_isoform_override(mut self, isoform_override: &str) -> Self {
        self.params.isoform_override = isoform_override.to_string();
        self
    }

    pub fn with_config(self, config: &RunConfig) -> Self {
        self.with_replace(config.replace)
            .with_isoform_override(&config.isoform_override)
    }

    pub fn params(&self) -> &AnnotationParams {
        &self.params
    }

    /// Read, annotate and aggregate the whole file.
    ///
    /// The file is read twice: once for the leading comment block, once for
    /// the table. Any error aborts the run without partial output.
    pub fn run<A: Annotator>(self, annotator: &A) -> Result<AnnotationRun> {
        info!("Annotating {}", self.maf_path);

        let comment_lines = extract_comments(&self.maf_path)?;
        let table = load_table(&self.maf_path)?;
        info!(
            "Loaded {} records ({} comment lines)",
            table.records.len(),
            comment_lines.len()
        );

        let outcome = annotate_records(table.records, &table.header, annotator, &self.params)?;

        let context = RunContext {
            source: self.maf_path,
            comment_lines,
            header: outcome.header,
            failures: outcome.failures,
        };
        Ok(AnnotationRun {
            context,
            records: RecordCursor::new(outcome.records),
        })
    }
}

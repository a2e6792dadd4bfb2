use log::{debug, info};

use super::failures::{FailureCause, FailureCounters, MITOCHONDRIAL_CHROMOSOME};
use crate::annotator::Annotator;
use crate::error::Result;
use crate::maf::record::columns;
use crate::maf::{AnnotatedRecord, MutationRecord};
use crate::output::OutputHeader;

/// Parameters handed to the annotator for every record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationParams {
    /// Overwrite annotation values already present in the input
    pub replace: bool,
    /// Isoform selector token; empty selects the annotator's default
    pub isoform_override: String,
    pub full_enrichment: bool,
}

impl AnnotationParams {
    /// Full enrichment is always requested.
    pub fn new(replace: bool, isoform_override: &str) -> Self {
        Self {
            replace,
            isoform_override: isoform_override.to_string(),
            full_enrichment: true,
        }
    }
}

/// Everything produced by annotating a loaded table
#[derive(Debug)]
pub struct AnnotationOutcome {
    pub records: Vec<AnnotatedRecord>,
    pub header: OutputHeader,
    pub failures: FailureCounters,
}

/// Annotate every record in input order.
///
/// Gaps (no HGVSc and no HGVSp) are classified, counted and logged; the
/// record is still kept. An `Err` from the annotator aborts the whole batch.
/// The returned header is the declared header extended by every column the
/// annotated records carry, in first-appearance order.
pub fn annotate_records<A: Annotator>(
    records: Vec<MutationRecord>,
    declared_header: &[String],
    annotator: &A,
    params: &AnnotationParams,
) -> Result<AnnotationOutcome> {
    let mut header = OutputHeader::seeded(declared_header);
    let mut failures = FailureCounters::default();
    let mut annotated_records = Vec::with_capacity(records.len());

    for record in records {
        let annotated = annotator.annotate(
            &record,
            params.replace,
            &params.isoform_override,
            params.full_enrichment,
        )?;

        if annotated.is_annotation_gap() {
            let cause = classify_failure(&annotated, annotator)?;
            let message = failure_message(&record, &annotated, &cause)?;
            failures.record(&cause);
            info!("{}", message);
        }

        header.merge(annotated.header_fields());
        annotated_records.push(annotated);
    }

    debug!(
        "Annotated {} records; output header has {} columns",
        annotated_records.len(),
        header.len()
    );
    failures.log_summary();

    Ok(AnnotationOutcome {
        records: annotated_records,
        header,
        failures,
    })
}

/// Decide why an annotated record has no HGVSc/HGVSp.
///
/// An HGVSp-null classification takes precedence over the mitochondrial check.
pub fn classify_failure<A: Annotator>(
    annotated: &AnnotatedRecord,
    annotator: &A,
) -> Result<FailureCause> {
    let classification = annotated.require(columns::VARIANT_CLASSIFICATION)?;
    if annotator.is_hgvsp_null_classification(classification) {
        return Ok(FailureCause::NullHgvspClassification(classification.to_string()));
    }
    if annotated.require(columns::CHROMOSOME)? == MITOCHONDRIAL_CHROMOSOME {
        return Ok(FailureCause::Mitochondrial);
    }
    Ok(FailureCause::Unclassified)
}

/// Diagnostic line for an annotation gap.
///
/// The locus comes from the input record; the alternate allele is the
/// annotated record's `Tumor_Seq_Allele2`.
pub fn failure_message(
    record: &MutationRecord,
    annotated: &AnnotatedRecord,
    cause: &FailureCause,
) -> Result<String> {
    Ok(format!(
        "Failed to annotate record for sample {} and variant (chr,start,end,ref,alt): ({},{},{},{},{}){}",
        record.tumor_sample_barcode()?,
        record.chromosome()?,
        record.require(columns::START_POSITION)?,
        record.require(columns::END_POSITION)?,
        record.require(columns::REFERENCE_ALLELE)?,
        annotated.require(columns::TUMOR_SEQ_ALLELE2)?,
        cause.describe(),
    ))
}

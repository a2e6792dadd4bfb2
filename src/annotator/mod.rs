//! Annotation capability
//!
//! The pipeline only depends on the [`Annotator`] trait. [`TableAnnotator`]
//! is the bundled engine, serving precomputed annotations from a JSON table.

pub mod table;

pub use table::TableAnnotator;

use crate::error::Result;
use crate::maf::{AnnotatedRecord, MutationRecord};

/// Variant classifications for which an empty HGVSp is expected
pub const DEFAULT_HGVSP_NULL_CLASSIFICATIONS: [&str; 10] = [
    "3'Flank",
    "3'UTR",
    "5'Flank",
    "5'UTR",
    "IGR",
    "Intron",
    "RNA",
    "Silent",
    "Targeted_Region",
    "Unknown",
];

pub trait Annotator {
    /// Annotate one record.
    ///
    /// Returning a record with empty HGVSc and HGVSp means annotation ran but
    /// found nothing. `Err` means the annotation mechanism itself failed.
    fn annotate(
        &self,
        record: &MutationRecord,
        replace: bool,
        isoform_override: &str,
        full_enrichment: bool,
    ) -> Result<AnnotatedRecord>;

    /// Whether an empty HGVSp is expected for this variant classification
    fn is_hgvsp_null_classification(&self, classification: &str) -> bool;
}

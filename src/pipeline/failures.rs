use log::info;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mitochondrial chromosome designator in MAF `Chromosome` values
pub const MITOCHONDRIAL_CHROMOSOME: &str = "M";

/// Why an annotation came back without HGVSc and HGVSp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// Classification for which an empty HGVSp is expected (e.g. Silent, Intron)
    NullHgvspClassification(String),
    /// Variant on the mitochondrial chromosome
    Mitochondrial,
    Unclassified,
}

impl FailureCause {
    /// Suffix appended to the per-record diagnostic
    pub fn describe(&self) -> String {
        match self {
            FailureCause::NullHgvspClassification(vc) => {
                format!(" - Ignoring record with HGVSp null classification: {}", vc)
            }
            FailureCause::Mitochondrial => {
                " - Cannot annotate mitochondrial variants at this time.".to_string()
            }
            FailureCause::Unclassified => String::new(),
        }
    }
}

/// Annotation gap counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FailureCounters {
    /// Records with neither HGVSc nor HGVSp after annotation
    pub failed_annotations: usize,
    /// Subset of failures with an HGVSp-null variant classification
    pub failed_null_hgvsp_annotations: usize,
    /// Subset of failures on the mitochondrial chromosome
    pub failed_mitochondrial_annotations: usize,
}

impl FailureCounters {
    /// Count one failure; the total always moves, at most one specialized counter does.
    pub fn record(&mut self, cause: &FailureCause) {
        match cause {
            FailureCause::NullHgvspClassification(_) => self.failed_null_hgvsp_annotations += 1,
            FailureCause::Mitochondrial => self.failed_mitochondrial_annotations += 1,
            FailureCause::Unclassified => {}
        }
        self.failed_annotations += 1;
    }

    /// End-of-run report, one line per counter
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Total records that failed annotation: {}", self.failed_annotations),
            format!(
                "# records with HGVSp null variant classification: {}",
                self.failed_null_hgvsp_annotations
            ),
            format!(
                "# records with Mitochondrial variants: {}",
                self.failed_mitochondrial_annotations
            ),
        ]
    }

    pub fn log_summary(&self) {
        for line in self.summary_lines() {
            info!("{}", line);
        }
    }
}

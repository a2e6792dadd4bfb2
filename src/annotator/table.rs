use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

use super::{Annotator, DEFAULT_HGVSP_NULL_CLASSIFICATIONS};
use crate::error::{AnnotateError, Result};
use crate::maf::{AnnotatedRecord, MutationRecord};

fn default_isoform() -> String {
    "uniprot".to_string()
}

/// On-disk layout of an annotation table
#[derive(Deserialize, Debug, Clone)]
pub struct AnnotationTableFile {
    /// Isoform used when no override token is given
    #[serde(default = "default_isoform")]
    pub default_isoform: String,
    /// Replaces the built-in HGVSp-null classification list when present
    #[serde(default)]
    pub hgvsp_null_classifications: Option<Vec<String>>,
    #[serde(default)]
    pub variants: Vec<VariantAnnotation>,
}

/// Precomputed annotation of one genomic location
#[derive(Deserialize, Debug, Clone)]
pub struct VariantAnnotation {
    /// `chrom,start,end,ref,alt`
    pub location: String,
    /// isoform token -> annotation columns
    #[serde(default)]
    pub isoforms: HashMap<String, IndexMap<String, String>>,
    /// Extra columns added only when full enrichment is requested
    #[serde(default)]
    pub enrichment: IndexMap<String, String>,
}

/// Annotator serving precomputed annotations keyed by genomic location.
#[derive(Debug, Clone)]
pub struct TableAnnotator {
    default_isoform: String,
    null_classifications: HashSet<String>,
    variants: HashMap<String, VariantAnnotation>,
}

impl TableAnnotator {
    /// Load an annotation table from a JSON file
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| AnnotateError::Open {
            path: path.to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            AnnotateError::Config { msg, .. } => AnnotateError::Config {
                path: path.to_string(),
                msg,
            },
            other => other,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let table: AnnotationTableFile =
            serde_json::from_reader(reader).map_err(|e| AnnotateError::Config {
                path: "<annotation table>".to_string(),
                msg: e.to_string(),
            })?;
        Ok(Self::from_table(table))
    }

    pub fn from_table(table: AnnotationTableFile) -> Self {
        let null_classifications = match table.hgvsp_null_classifications {
            Some(list) => list.into_iter().collect(),
            None => DEFAULT_HGVSP_NULL_CLASSIFICATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let mut variants = HashMap::with_capacity(table.variants.len());
        for v in table.variants {
            let key = normalize_location(&v.location);
            if variants.contains_key(&key) {
                warn!("Duplicate annotation for {} -- keeping the first entry", key);
                continue;
            }
            variants.insert(key, v);
        }
        debug!("Annotation table holds {} variants", variants.len());

        Self {
            default_isoform: table.default_isoform,
            null_classifications,
            variants,
        }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Annotator for TableAnnotator {
    fn annotate(
        &self,
        record: &MutationRecord,
        replace: bool,
        isoform_override: &str,
        full_enrichment: bool,
    ) -> Result<AnnotatedRecord> {
        let location = record.genomic_location()?;
        let mut annotated = AnnotatedRecord::from_record(record);

        let Some(entry) = self.variants.get(&location) else {
            return Ok(annotated);
        };

        let isoform = if isoform_override.is_empty() {
            self.default_isoform.as_str()
        } else {
            isoform_override
        };
        match entry.isoforms.get(isoform) {
            Some(cols) => {
                for (name, value) in cols {
                    annotated.set(name, value, replace);
                }
            }
            None => debug!("No {} isoform annotation for {}", isoform, location),
        }

        if full_enrichment {
            for (name, value) in &entry.enrichment {
                annotated.set(name, value, replace);
            }
        }
        Ok(annotated)
    }

    fn is_hgvsp_null_classification(&self, classification: &str) -> bool {
        self.null_classifications.contains(classification)
    }
}

fn normalize_location(location: &str) -> String {
    let trimmed = location.trim();
    trimmed.strip_prefix("chr").unwrap_or(trimmed).to_string()
}

use indexmap::IndexMap;

use crate::error::{AnnotateError, Result};

/// Column names the pipeline looks up by name.
pub mod columns {
    pub const HUGO_SYMBOL: &str = "Hugo_Symbol";
    pub const CHROMOSOME: &str = "Chromosome";
    pub const START_POSITION: &str = "Start_Position";
    pub const END_POSITION: &str = "End_Position";
    pub const REFERENCE_ALLELE: &str = "Reference_Allele";
    pub const TUMOR_SEQ_ALLELE2: &str = "Tumor_Seq_Allele2";
    pub const TUMOR_SAMPLE_BARCODE: &str = "Tumor_Sample_Barcode";
    pub const VARIANT_CLASSIFICATION: &str = "Variant_Classification";

    pub const HGVSC: &str = "HGVSc";
    pub const HGVSP: &str = "HGVSp";
    pub const HGVSP_SHORT: &str = "HGVSp_Short";
    pub const TRANSCRIPT_ID: &str = "Transcript_ID";
    pub const REFSEQ: &str = "RefSeq";
    pub const PROTEIN_POSITION: &str = "Protein_position";
    pub const CODONS: &str = "Codons";
    pub const EXON_NUMBER: &str = "Exon_Number";

    /// Columns every MAF handed to the loader must declare
    pub const REQUIRED: [&str; 7] = [
        CHROMOSOME,
        START_POSITION,
        END_POSITION,
        REFERENCE_ALLELE,
        TUMOR_SEQ_ALLELE2,
        TUMOR_SAMPLE_BARCODE,
        VARIANT_CLASSIFICATION,
    ];

    /// Columns every annotated record carries, in the order they are appended
    pub const ANNOTATION: [&str; 8] = [
        HGVSC,
        HGVSP,
        HGVSP_SHORT,
        TRANSCRIPT_ID,
        REFSEQ,
        PROTEIN_POSITION,
        CODONS,
        EXON_NUMBER,
    ];
}

/// One data row of a MAF file, keyed by the declared header.
///
/// Field order follows the header line, so iterating fields reproduces the
/// input column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationRecord {
    fields: IndexMap<String, String>,
}

impl MutationRecord {
    /// Zip a header with the tokens of one data line.
    ///
    /// Callers check that both have the same length; surplus entries on
    /// either side are dropped.
    pub fn from_columns(header: &[String], values: &[&str]) -> Self {
        let fields = header
            .iter()
            .zip(values)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Look up a field that must be present.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| AnnotateError::MissingField(name.to_string()))
    }

    /// Column names in declared order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn chromosome(&self) -> Result<&str> {
        self.require(columns::CHROMOSOME)
    }

    pub fn tumor_sample_barcode(&self) -> Result<&str> {
        self.require(columns::TUMOR_SAMPLE_BARCODE)
    }

    pub fn variant_classification(&self) -> Result<&str> {
        self.require(columns::VARIANT_CLASSIFICATION)
    }

    /// Genomic location as `chrom,start,end,ref,alt` with any `chr` prefix removed.
    ///
    /// The alternate allele is `Tumor_Seq_Allele2`.
    pub fn genomic_location(&self) -> Result<String> {
        let chrom = self.chromosome()?;
        let chrom = chrom.strip_prefix("chr").unwrap_or(chrom);
        Ok(format!(
            "{},{},{},{},{}",
            chrom,
            self.require(columns::START_POSITION)?,
            self.require(columns::END_POSITION)?,
            self.require(columns::REFERENCE_ALLELE)?,
            self.require(columns::TUMOR_SEQ_ALLELE2)?,
        ))
    }
}

/// A [`MutationRecord`] after annotation.
///
/// Annotation columns are merged into the record's own fields: a column the
/// input already declared keeps its position, a new column is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedRecord {
    fields: IndexMap<String, String>,
}

impl AnnotatedRecord {
    /// Start from the unannotated record with every standard annotation column present.
    pub fn from_record(record: &MutationRecord) -> Self {
        let mut fields = record.fields.clone();
        for col in columns::ANNOTATION {
            fields.entry(col.to_string()).or_default();
        }
        Self { fields }
    }

    /// Set a column, appending it if new.
    ///
    /// With `replace == false` a non-empty existing value is left untouched.
    pub fn set(&mut self, name: &str, value: &str, replace: bool) {
        match self.fields.get_mut(name) {
            Some(existing) => {
                if replace || existing.is_empty() {
                    *existing = value.to_string();
                }
            }
            None => {
                self.fields.insert(name.to_string(), value.to_string());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| AnnotateError::MissingField(name.to_string()))
    }

    pub fn hgvsc(&self) -> &str {
        self.get(columns::HGVSC).unwrap_or("")
    }

    pub fn hgvsp(&self) -> &str {
        self.get(columns::HGVSP).unwrap_or("")
    }

    /// True when annotation produced neither coding nor protein notation
    pub fn is_annotation_gap(&self) -> bool {
        self.hgvsc().is_empty() && self.hgvsp().is_empty()
    }

    /// Every column this record carries: input columns first, then annotation columns
    pub fn header_fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|s| s.to_string()).collect()
    }

    fn sample_record() -> MutationRecord {
        let h = header(&[
            "Hugo_Symbol",
            "Chromosome",
            "Start_Position",
            "End_Position",
            "Reference_Allele",
            "Tumor_Seq_Allele2",
            "Tumor_Sample_Barcode",
            "Variant_Classification",
        ]);
        MutationRecord::from_columns(
            &h,
            &["TP53", "chr17", "7577120", "7577120", "C", "T", "S1", "Missense_Mutation"],
        )
    }

    #[test]
    fn test_field_order_follows_header() {
        let rec = sample_record();
        let names: Vec<&str> = rec.field_names().collect();
        assert_eq!(names[0], columns::HUGO_SYMBOL);
        assert_eq!(names[7], "Variant_Classification");
        assert_eq!(rec.len(), 8);
    }

    #[test]
    fn test_require_missing_field() {
        let rec = MutationRecord::from_columns(&header(&["Chromosome"]), &["1"]);
        assert_eq!(rec.chromosome().unwrap(), "1");
        let err = rec.variant_classification().unwrap_err();
        assert!(err.to_string().contains("Variant_Classification"));
    }

    #[test]
    fn test_genomic_location_strips_chr() {
        let rec = sample_record();
        assert_eq!(rec.genomic_location().unwrap(), "17,7577120,7577120,C,T");
    }

    #[test]
    fn test_annotated_record_appends_annotation_columns() {
        let rec = sample_record();
        let ann = AnnotatedRecord::from_record(&rec);
        let names: Vec<&str> = ann.header_fields().collect();
        assert_eq!(names.len(), 8 + columns::ANNOTATION.len());
        assert_eq!(names[8], "HGVSc");
        assert_eq!(names[9], "HGVSp");
        assert!(ann.is_annotation_gap());
    }

    #[test]
    fn test_existing_annotation_column_keeps_position() {
        let h = header(&["HGVSp", "Chromosome"]);
        let rec = MutationRecord::from_columns(&h, &["p.R175H", "17"]);
        let ann = AnnotatedRecord::from_record(&rec);
        let names: Vec<&str> = ann.header_fields().collect();
        assert_eq!(names[0], "HGVSp");
        assert_eq!(names[1], "Chromosome");
        assert_eq!(names[2], "HGVSc");
        assert!(!ann.is_annotation_gap());
    }

    #[test]
    fn test_set_respects_replace() {
        let h = header(&["HGVSc"]);
        let rec = MutationRecord::from_columns(&h, &["c.524G>A"]);

        let mut kept = AnnotatedRecord::from_record(&rec);
        kept.set("HGVSc", "c.1A>T", false);
        assert_eq!(kept.hgvsc(), "c.524G>A");

        let mut replaced = AnnotatedRecord::from_record(&rec);
        replaced.set("HGVSc", "c.1A>T", true);
        assert_eq!(replaced.hgvsc(), "c.1A>T");

        replaced.set("Hotspot", "1", false);
        assert_eq!(replaced.header_fields().last(), Some("Hotspot"));
    }
}

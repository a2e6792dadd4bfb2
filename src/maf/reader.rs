use std::fs::File;
use std::io::{BufRead, BufReader};

use log::debug;

use super::COMMENT_PREFIX;
use super::record::{MutationRecord, columns};
use crate::error::{AnnotateError, Result};

/// A fully loaded MAF body: declared column names and every data row in input order.
#[derive(Debug, Clone, Default)]
pub struct MafTable {
    pub header: Vec<String>,
    pub records: Vec<MutationRecord>,
}

impl MafTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn load_table(path: &str) -> Result<MafTable> {
    let file = File::open(path).map_err(|source| AnnotateError::Open {
        path: path.to_string(),
        source,
    })?;
    let table = load_table_from_reader(BufReader::new(file))?;
    debug!(
        "Loaded {} records with {} columns from {}",
        table.records.len(),
        table.header.len(),
        path
    );
    Ok(table)
}

/// Parse a MAF body from a reader.
///
/// Comment lines and empty lines are skipped wherever they occur. The first
/// remaining line names the columns; every later line must split into exactly
/// that many tab-separated fields. A reader with no header line yields an empty table.
pub fn load_table_from_reader<R: BufRead>(reader: R) -> Result<MafTable> {
    let mut header: Option<Vec<String>> = None;
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.starts_with(COMMENT_PREFIX) || line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match &header {
            None => {
                let names: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
                check_required_columns(&names)?;
                header = Some(names);
            }
            Some(names) => {
                if fields.len() != names.len() {
                    return Err(AnnotateError::FieldCount {
                        line: i + 1,
                        expected: names.len(),
                        actual: fields.len(),
                    });
                }
                records.push(MutationRecord::from_columns(names, &fields));
            }
        }
    }

    Ok(MafTable {
        header: header.unwrap_or_default(),
        records,
    })
}

fn check_required_columns(header: &[String]) -> Result<()> {
    for required in columns::REQUIRED {
        if !header.iter().any(|c| c == required) {
            return Err(AnnotateError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Hugo_Symbol\tChromosome\tStart_Position\tEnd_Position\tReference_Allele\tTumor_Seq_Allele2\tTumor_Sample_Barcode\tVariant_Classification";

    #[test]
    fn test_maf_parsing() {
        let data = format!(
            "#version 2.4\n{}\nTP53\t17\t7577120\t7577120\tC\tT\tS1\tMissense_Mutation\nKRAS\t12\t25398284\t25398284\tC\tA\tS2\tMissense_Mutation\n",
            HEADER
        );
        let table = load_table_from_reader(Cursor::new(data)).unwrap();

        assert_eq!(table.header.len(), 8);
        assert_eq!(table.header[0], "Hugo_Symbol");
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].get("Hugo_Symbol"), Some("TP53"));
        assert_eq!(table.records[1].get("Hugo_Symbol"), Some("KRAS"));
        assert_eq!(table.records[1].chromosome().unwrap(), "12");
    }

    #[test]
    fn test_extra_columns_kept_in_order() {
        let data = format!(
            "{}\tt_alt_count\tCustom\nTP53\t17\t1\t1\tC\tT\tS1\tSilent\t12\tx\n",
            HEADER
        );
        let table = load_table_from_reader(Cursor::new(data)).unwrap();
        let names: Vec<&str> = table.records[0].field_names().collect();
        assert_eq!(names[8], "t_alt_count");
        assert_eq!(names[9], "Custom");
        assert_eq!(table.records[0].get("Custom"), Some("x"));
    }

    #[test]
    fn test_empty_trailing_fields() {
        let data = format!("{}\nTP53\t17\t1\t1\tC\tT\tS1\t\n", HEADER);
        let table = load_table_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.records[0].variant_classification().unwrap(), "");
    }

    #[test]
    fn test_field_count_mismatch() {
        // Line 3 (physical) is short by one field
        let data = format!(
            "#comment\n{}\nTP53\t17\t1\t1\tC\tT\tS1\n",
            HEADER
        );
        let err = load_table_from_reader(Cursor::new(data)).unwrap_err();
        match err {
            AnnotateError::FieldCount { line, expected, actual } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_required_column() {
        let data = "Hugo_Symbol\tChromosome\nTP53\t17\n";
        let err = load_table_from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, AnnotateError::MissingColumn(ref c) if c == "Start_Position"));
    }

    #[test]
    fn test_header_only() {
        let data = format!("#a\n#b\n{}\n", HEADER);
        let table = load_table_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.header.len(), 8);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let table = load_table_from_reader(Cursor::new("")).unwrap();
        assert!(table.header.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_crlf_and_interior_comments() {
        let data = format!(
            "{}\r\nTP53\t17\t1\t1\tC\tT\tS1\tSilent\r\n#skipped\n\nKRAS\t12\t2\t2\tG\tA\tS1\tSilent\r\n",
            HEADER
        );
        let table = load_table_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.header[7], "Variant_Classification");
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].variant_classification().unwrap(), "Silent");
    }

    #[test]
    fn test_all_empty_row_is_a_record() {
        let data = format!(
            "{}\n\t\t\t\t\t\t\t\nTP53\t17\t1\t1\tC\tT\tS1\tSilent\n",
            HEADER
        );
        let table = load_table_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].len(), 8);
        assert_eq!(table.records[0].chromosome().unwrap(), "");
        assert_eq!(table.records[1].get(columns::HUGO_SYMBOL), Some("TP53"));
    }

    #[test]
    fn test_short_tab_only_row_is_malformed() {
        let data = format!(
            "{}\n\t\t\nTP53\t17\t1\t1\tC\tT\tS1\tSilent\n",
            HEADER
        );
        let err = load_table_from_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            AnnotateError::FieldCount { line: 2, expected: 8, actual: 3 }
        ));
    }
}

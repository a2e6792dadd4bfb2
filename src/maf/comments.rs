use std::fs::File;
use std::io::{BufRead, BufReader};

use log::debug;

use super::COMMENT_PREFIX;
use crate::error::{AnnotateError, Result};

/// Read the leading comment block of a MAF file.
///
/// Stops at the first line that does not start with `#`; later comment
/// lines are not part of the block.
pub fn extract_comments(path: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| AnnotateError::Open {
        path: path.to_string(),
        source,
    })?;
    let comments = extract_comments_from_reader(BufReader::new(file))?;
    debug!("Read {} comment lines from {}", comments.len(), path);
    Ok(comments)
}

pub fn extract_comments_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut comments = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(COMMENT_PREFIX) {
            break;
        }
        comments.push(line);
    }
    Ok(comments)
}

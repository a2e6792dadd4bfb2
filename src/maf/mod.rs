//! MAF (Mutation Annotation Format) input handling
//!
//! A MAF file is read twice: once by [`comments::extract_comments`] for the
//! leading `#` block that the writer reproduces verbatim, and once by
//! [`reader::load_table`] for the header-driven tab-delimited records.

pub mod comments;
pub mod reader;
pub mod record;

pub use comments::{extract_comments, extract_comments_from_reader};
pub use reader::{MafTable, load_table, load_table_from_reader};
pub use record::{AnnotatedRecord, MutationRecord};

/// Marker that starts a comment line
pub const COMMENT_PREFIX: char = '#';

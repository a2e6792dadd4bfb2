//! Output side of an annotation run
//!
//! - `OutputHeader`: union of columns across annotated records
//! - `RecordCursor`: one-shot sequence of annotated records
//! - `MafWriter`: writer stage producing the annotated MAF
//! - `RunSummary`: JSON report of counts and header, checked against its own schema

pub mod cursor;
pub mod header;
pub mod summary;
pub mod writer;

pub use cursor::RecordCursor;
pub use header::OutputHeader;
pub use summary::RunSummary;
pub use writer::MafWriter;

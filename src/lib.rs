pub mod annotator;
pub mod config;
pub mod error;
pub mod maf;
pub mod output;
pub mod pipeline;

pub use error::{AnnotateError, Result};

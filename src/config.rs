//! Run configuration for the annotation pipeline.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use crate::error::{AnnotateError, Result};

fn default_isoform_override() -> String {
    "uniprot".to_string()
}

/// Per-run annotation options
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Overwrite annotation values already present in the input MAF
    #[serde(default)]
    pub replace: bool,
    /// Isoform selector passed to the annotator (e.g. "uniprot", "mskcc")
    #[serde(default = "default_isoform_override")]
    pub isoform_override: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            replace: false,
            isoform_override: default_isoform_override(),
        }
    }
}

impl RunConfig {
    /// Load run configuration from a JSON file
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| AnnotateError::Open {
            path: path.to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| AnnotateError::Config {
            path: path.to_string(),
            msg: e.to_string(),
        })
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, replace: bool, isoform_override: Option<&str>) -> Self {
        self.replace |= replace;
        if let Some(iso) = isoform_override {
            self.isoform_override = iso.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        assert!(!config.replace);
        assert_eq!(config.isoform_override, "uniprot");
    }

    #[test]
    fn test_overrides() {
        let config: RunConfig =
            serde_json::from_str(r#"{"replace": false, "isoform_override": "mskcc"}"#).unwrap();
        let config = config.with_overrides(true, None);
        assert!(config.replace);
        assert_eq!(config.isoform_override, "mskcc");

        let config = config.with_overrides(false, Some("uniprot"));
        assert!(config.replace);
        assert_eq!(config.isoform_override, "uniprot");
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, "{\"replace\": \"yes\"}").unwrap();
        let err = RunConfig::load(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, AnnotateError::Config { .. }));
    }
}

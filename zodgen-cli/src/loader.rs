//! IR document loading.
//!
//! The compiler consumes a fully materialized IR snapshot; this module reads
//! one from a JSON file and hands back the typed document.

use std::path::{Path, PathBuf};

use crate::error::{CliResult, LoadError};
use zodgen::IrDocument;

/// Loader for IR document files.
#[derive(Debug)]
pub struct IrLoader {
    path: PathBuf,
}

impl IrLoader {
    /// Create a loader for the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the IR document.
    pub fn load(&self) -> CliResult<IrDocument> {
        if !self.path.exists() {
            return Err(LoadError::not_found(self.path.clone()).into());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| LoadError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let doc: IrDocument = serde_json::from_str(&content)
            .map_err(|e| LoadError::invalid_document(self.path.clone(), e.to_string()))?;

        Ok(doc)
    }
}

//! YAML output: one file per document plus the per-container metadata
//! summary. Writes are idempotent; re-running an export overwrites.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::services::export::clean;
use crate::types::errors::{ExportError, ExportResult};
use crate::types::model::{Document, ModelMetadata};

/// Extension of every emitted structured text file.
pub const TEXT_EXTENSION: &str = "yaml";

/// Summary filename, written once per source file at the output root.
pub const METADATA_FILENAME: &str = "Metadata.yaml";

/// Write one document under its resolved directory, creating
/// intermediate directories on demand.
///
/// Filename rule: `<Name>.<$Type>.yaml`, or `<$Type>.yaml` when the name
/// is empty so nameless documents do not become dotfiles.
pub fn write_document(output_root: &Path, document: &Document, raw: bool) -> ExportResult<()> {
    let directory = output_root.join(&document.path);
    fs::create_dir_all(&directory)
        .map_err(|e| ExportError::Io(format!("cannot create {}: {e}", directory.display())))?;

    let filename = if document.name.is_empty() {
        format!("{}.{TEXT_EXTENSION}", document.declared_type)
    } else {
        format!("{}.{}.{TEXT_EXTENSION}", document.name, document.declared_type)
    };

    let attributes = clean::clean_attributes(&document.attributes, raw);
    write_yaml(&directory.join(filename), &attributes)
}

/// Write the metadata summary at the output root.
pub fn write_metadata(output_root: &Path, metadata: &ModelMetadata) -> ExportResult<()> {
    fs::create_dir_all(output_root)
        .map_err(|e| ExportError::Io(format!("cannot create {}: {e}", output_root.display())))?;
    write_yaml(&output_root.join(METADATA_FILENAME), metadata)
}

fn write_yaml<T: Serialize>(path: &Path, value: &T) -> ExportResult<()> {
    log::debug!("Writing file {}", path.display());
    let text = serde_yaml::to_string(value)?;
    fs::write(path, text)
        .map_err(|e| ExportError::Io(format!("cannot write {}: {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod tests;

//! Per-file export pipeline and the multi-file driver.

pub mod assembler;
pub mod clean;
pub mod microflow;
pub mod sink;
pub mod walker;

use std::path::{Path, PathBuf};

use crate::database::model_repo;
use crate::services::hierarchy::Folders;
use crate::types::errors::{ExportError, ExportResult};
use crate::types::model::{ExportMode, ModelMetadata};

/// Outcome of a multi-file export run. The walk is best-effort: a file
/// that fails is recorded here and the run continues with the next one,
/// so callers must check `failed` rather than assume total success.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub exported: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ExportError)>,
}

impl ExportReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Export every model container found under `input_root` into
/// `output_root`, one file at a time.
pub async fn export_model_tree(
    input_root: &Path,
    output_root: &Path,
    raw: bool,
    mode: ExportMode,
) -> ExportResult<ExportReport> {
    if !input_root.is_dir() {
        return Err(ExportError::Io(format!(
            "input root {} is not a directory",
            input_root.display()
        )));
    }

    let mut report = ExportReport::default();
    for path in walker::find_model_files(input_root) {
        match export_model(&path, output_root, raw, mode).await {
            Ok(()) => report.exported.push(path),
            Err(e) => {
                log::error!("Export of {} failed: {e}", path.display());
                report.failed.push((path, e));
            }
        }
    }
    Ok(report)
}

/// Full pipeline for one container: metadata summary first, then every
/// document. Output is not transactional; files written before a failure
/// are kept.
pub async fn export_model(
    model_path: &Path,
    output_root: &Path,
    raw: bool,
    mode: ExportMode,
) -> ExportResult<()> {
    log::info!(
        "Exporting {} to {}",
        model_path.display(),
        output_root.display()
    );
    export_metadata(model_path, output_root).await?;
    export_documents(model_path, output_root, raw, mode).await?;
    log::info!("Completed {}", model_path.display());
    Ok(())
}

/// Write the `Metadata.yaml` summary: the container's version strings
/// plus the module list projected from the unit table.
async fn export_metadata(model_path: &Path, output_root: &Path) -> ExportResult<()> {
    log::debug!("Exporting metadata");
    let pool = model_repo::open_model(model_path).await?;
    let (product_version, build_version) = model_repo::fetch_metadata(&pool).await?;
    let units = model_repo::fetch_units(&pool).await?;
    pool.close().await;

    let metadata = ModelMetadata {
        product_version,
        build_version,
        modules: assembler::collect_modules(&units)?,
    };
    sink::write_metadata(output_root, &metadata)
}

/// Rebuild the folder hierarchy and write every content document under
/// its resolved directory.
async fn export_documents(
    model_path: &Path,
    output_root: &Path,
    raw: bool,
    mode: ExportMode,
) -> ExportResult<()> {
    let pool = model_repo::open_model(model_path).await?;
    let units = model_repo::fetch_units(&pool).await?;
    pool.close().await;

    let folders = Folders::build(&units)?;
    let documents = assembler::collect_documents(&units, &folders, mode)?;
    for document in &documents {
        sink::write_document(output_root, document, raw)?;
    }
    Ok(())
}

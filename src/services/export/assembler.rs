//! Selection of content-bearing units and their projection onto the
//! resolved folder hierarchy.

use crate::services::export::microflow;
use crate::services::hierarchy::Folders;
use crate::types::errors::{ExportError, ExportResult};
use crate::types::model::{Document, ExportMode, ModuleEntry, Unit};

/// Roles whose units carry exportable content.
const DOCUMENT_ROLES: &[&str] = &[
    "ProjectDocuments",
    "DomainModel",
    "ModuleSettings",
    "ModuleSecurity",
    "Documents",
];

/// Build one [`Document`] per content-bearing unit, in input order.
///
/// `Name` is optional (empty when absent), `$Type` is required: a
/// qualifying unit without it violates the model format's own contract.
/// In advanced mode, microflow documents get the enrichment pass before
/// emission.
pub fn collect_documents(
    units: &[Unit],
    folders: &Folders,
    mode: ExportMode,
) -> ExportResult<Vec<Document>> {
    let mut documents = Vec::new();
    for unit in units {
        if !DOCUMENT_ROLES.contains(&unit.containment.as_str()) {
            continue;
        }
        log::debug!("Document unit {} ({})", unit.id, unit.containment);

        let name = unit.contents.get_str("Name").unwrap_or_default().to_string();
        let declared_type = unit
            .contents
            .get_str("$Type")
            .map_err(|_| {
                ExportError::Contract(format!("document unit {} has no $Type attribute", unit.id))
            })?
            .to_string();

        let mut document = Document {
            name,
            declared_type,
            path: folders.resolve_path(&unit.container_id),
            attributes: unit.contents.clone(),
        };
        if mode == ExportMode::Advanced && document.declared_type == microflow::MICROFLOW_TYPE {
            document = microflow::enrich(document);
        }
        documents.push(document);
    }

    log::info!("Found {} documents", documents.len());
    Ok(documents)
}

/// Project the `Modules` subset of the unit table for the metadata
/// summary. A module without a `Name` attribute is a contract violation.
pub fn collect_modules(units: &[Unit]) -> ExportResult<Vec<ModuleEntry>> {
    let mut modules = Vec::new();
    for unit in units {
        if unit.containment != "Modules" {
            continue;
        }
        let name = unit.contents.get_str("Name").map_err(|_| {
            ExportError::Contract(format!("module unit {} has no Name attribute", unit.id))
        })?;
        modules.push(ModuleEntry {
            name: name.to_string(),
            id: unit.id.clone(),
            attributes: unit.contents.clone(),
        });
    }
    Ok(modules)
}

#[cfg(test)]
#[path = "tests/assembler_tests.rs"]
mod tests;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One decoded row of the container's `Unit` table.
///
/// `id` and `container_id` are the base64 form of the raw identifier
/// BLOBs. The encoding is one-way on purpose: identifiers are only ever
/// compared and used as map keys, never decoded back.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: String,
    /// Id of the containing unit. May be empty, dangling, or equal to
    /// `id` itself.
    pub container_id: String,
    /// Structural role label (`Folders`, `Modules`, `Documents`, ...).
    /// Empty for the project root unit.
    pub containment: String,
    /// Self-describing attribute tree, type-erased.
    pub contents: bson::Document,
}

/// A unit reinterpreted as a node of the folder hierarchy.
///
/// `parent` is an id-valued back-reference resolved through the owning
/// [`Folders`](crate::services::hierarchy::Folders) arena. It is `None`
/// for roots: units whose container id matches nothing, or matches the
/// unit itself.
#[derive(Debug, Clone)]
pub struct FolderNode {
    pub name: String,
    pub id: String,
    pub parent_id: String,
    pub attributes: bson::Document,
    pub parent: Option<String>,
}

/// A unit reinterpreted as exportable content with a resolved output
/// directory, relative to the output root.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name. Empty when the record carries no `Name` attribute.
    pub name: String,
    /// Value of the `$Type` attribute, e.g. `Microflows$Microflow`.
    pub declared_type: String,
    pub path: PathBuf,
    pub attributes: bson::Document,
}

/// Projection of a `Modules` unit for the metadata summary.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Attributes")]
    pub attributes: bson::Document,
}

/// Top-level summary written once per source file as `Metadata.yaml`.
/// Keys stay PascalCase to match the container's own field naming.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelMetadata {
    pub product_version: String,
    pub build_version: String,
    pub modules: Vec<ModuleEntry>,
}

/// Export mode selected on the command line.
///
/// Anything other than `advanced` means basic: content is written
/// structurally unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    #[default]
    Basic,
    Advanced,
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportMode::Basic => write!(f, "basic"),
            ExportMode::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ExportMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advanced" => Ok(ExportMode::Advanced),
            _ => Ok(ExportMode::Basic),
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;

//! Folder hierarchy reconstruction from the flat unit table.
//!
//! Units reference their container only by opaque id. The hierarchy is
//! an arena: one id-indexed map owning every node, with parent relations
//! kept as id-valued back-references resolved through that map.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::errors::{ExportError, ExportResult};
use crate::types::model::{FolderNode, Unit};

/// Roles whose units become hierarchy nodes.
const FOLDER_ROLES: &[&str] = &["Folders", "Modules"];

/// Name given to role-less root units. Path joins drop it, so documents
/// contained directly in the root land at the output root itself.
pub const ROOT_NAME: &str = ".";

/// Ancestor walk ceiling. Bounds path resolution against cycles longer
/// than the trivial self-loop, which the builder does not detect.
const MAX_FOLDER_DEPTH: usize = 10;

/// The resolved folder forest of one model file. Built once per export,
/// read-only afterwards.
#[derive(Debug)]
pub struct Folders {
    nodes: HashMap<String, FolderNode>,
}

impl Folders {
    /// Two-pass build: index folder-bearing units by id, then link each
    /// node's parent through the index.
    ///
    /// A container id that matches no node, or the node's own id, leaves
    /// the node a root. Multiple unrelated roots are legal; each chain
    /// resolves independently.
    pub fn build(units: &[Unit]) -> ExportResult<Folders> {
        let mut nodes = HashMap::new();
        for unit in units {
            let name = if FOLDER_ROLES.contains(&unit.containment.as_str()) {
                unit.contents
                    .get_str("Name")
                    .map_err(|_| {
                        ExportError::Contract(format!(
                            "folder unit {} has no Name attribute",
                            unit.id
                        ))
                    })?
                    .to_string()
            } else if unit.containment.is_empty() {
                ROOT_NAME.to_string()
            } else {
                continue;
            };

            log::debug!("Folder unit {} ({name})", unit.id);
            nodes.insert(
                unit.id.clone(),
                FolderNode {
                    name,
                    id: unit.id.clone(),
                    parent_id: unit.container_id.clone(),
                    attributes: unit.contents.clone(),
                    parent: None,
                },
            );
        }

        let links: Vec<(String, Option<String>)> = nodes
            .values()
            .map(|node| {
                let parent = (node.parent_id != node.id && nodes.contains_key(&node.parent_id))
                    .then(|| node.parent_id.clone());
                (node.id.clone(), parent)
            })
            .collect();
        for (id, parent) in links {
            if let Some(node) = nodes.get_mut(&id) {
                node.parent = parent;
            }
        }

        Ok(Folders { nodes })
    }

    pub fn get(&self, id: &str) -> Option<&FolderNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Output directory for a unit contained in `container_id`: ancestor
    /// names joined root-to-leaf, up to and including the containing
    /// folder itself. Empty when the id matches no folder.
    ///
    /// The walk stops after `MAX_FOLDER_DEPTH` names. Hitting the
    /// ceiling means the chain is deeper than any well-formed model, so
    /// the truncation is logged and the root-side names are dropped.
    pub fn resolve_path(&self, container_id: &str) -> PathBuf {
        let Some(start) = self.nodes.get(container_id) else {
            return PathBuf::new();
        };

        let mut names = Vec::new();
        let mut current = Some(start);
        while let Some(node) = current {
            if names.len() == MAX_FOLDER_DEPTH {
                log::warn!(
                    "Folder chain above {} exceeds {MAX_FOLDER_DEPTH} levels, truncating path (cyclic hierarchy?)",
                    start.id
                );
                break;
            }
            names.push(node.name.as_str());
            current = node.parent.as_deref().and_then(|id| self.nodes.get(id));
        }

        names
            .iter()
            .rev()
            .copied()
            .filter(|name| *name != ROOT_NAME)
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/hierarchy_tests.rs"]
mod tests;

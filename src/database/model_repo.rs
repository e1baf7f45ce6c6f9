//! Read access to a model container: a SQLite file holding a `_MetaData`
//! table (version strings) and a flat `Unit` table of BSON-encoded,
//! self-describing records.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

use crate::types::errors::{ExportError, ExportResult};
use crate::types::model::Unit;

/// Open a container read-only. The source file is never written to.
pub async fn open_model(path: &Path) -> ExportResult<SqlitePool> {
    let opts = SqliteConnectOptions::new().filename(path).read_only(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .map_err(|e| ExportError::Open(format!("cannot open model {}: {e}", path.display())))
}

/// Read the product and build version strings from `_MetaData`.
pub async fn fetch_metadata(pool: &SqlitePool) -> ExportResult<(String, String)> {
    let row: Option<(String, String)> =
        sqlx::query_as("SELECT _ProductVersion, _BuildVersion FROM _MetaData")
            .fetch_optional(pool)
            .await?;
    row.ok_or_else(|| ExportError::NotFound("no metadata row in _MetaData".into()))
}

/// Read every record of the `Unit` table, decoding each `Contents` BLOB
/// into an attribute tree.
///
/// Rows come back in `rowid` order so repeated exports of the same
/// container produce the same document order. Identifier BLOBs are
/// base64-encoded; the resulting strings are only ever compared and used
/// as map keys, never decoded back.
pub async fn fetch_units(pool: &SqlitePool) -> ExportResult<Vec<Unit>> {
    let rows: Vec<(Option<Vec<u8>>, Option<Vec<u8>>, Option<String>, Vec<u8>)> = sqlx::query_as(
        "SELECT UnitID, ContainerID, ContainmentName, Contents FROM Unit ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    let mut units = Vec::with_capacity(rows.len());
    for (unit_id, container_id, containment, contents) in rows {
        let id = encode_id(unit_id.as_deref().unwrap_or_default());
        let contents = bson::Document::from_reader(&contents[..])
            .map_err(|e| ExportError::Decode(format!("unit {id}: {e}")))?;
        units.push(Unit {
            id,
            container_id: encode_id(container_id.as_deref().unwrap_or_default()),
            containment: containment.unwrap_or_default(),
            contents,
        });
    }

    log::debug!("Loaded {} units", units.len());
    Ok(units)
}

/// Stable one-way string form of a raw identifier BLOB.
pub fn encode_id(raw: &[u8]) -> String {
    BASE64.encode(raw)
}

#[cfg(test)]
#[path = "tests/model_repo_tests.rs"]
mod tests;

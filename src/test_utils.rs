//! Shared fixture helpers for in-crate tests.

use bson::Document;
use sqlx::SqlitePool;
use std::sync::Once;

use crate::types::model::Unit;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Create the two container tables on an open pool.
pub async fn create_container_schema(pool: &SqlitePool) {
    sqlx::query("CREATE TABLE _MetaData (_ProductVersion TEXT, _BuildVersion TEXT)")
        .execute(pool)
        .await
        .expect("create _MetaData");
    sqlx::query(
        "CREATE TABLE Unit (UnitID BLOB, ContainerID BLOB, ContainmentName TEXT, Contents BLOB)",
    )
    .execute(pool)
    .await
    .expect("create Unit");
}

pub async fn insert_metadata(pool: &SqlitePool, product_version: &str, build_version: &str) {
    sqlx::query("INSERT INTO _MetaData (_ProductVersion, _BuildVersion) VALUES (?, ?)")
        .bind(product_version)
        .bind(build_version)
        .execute(pool)
        .await
        .expect("insert metadata");
}

/// Insert one unit row with BSON-encoded contents.
pub async fn insert_unit(
    pool: &SqlitePool,
    unit_id: &[u8],
    container_id: &[u8],
    containment: &str,
    contents: &Document,
) {
    let mut payload = Vec::new();
    contents.to_writer(&mut payload).expect("encode contents");
    sqlx::query("INSERT INTO Unit (UnitID, ContainerID, ContainmentName, Contents) VALUES (?, ?, ?, ?)")
        .bind(unit_id.to_vec())
        .bind(container_id.to_vec())
        .bind(containment)
        .bind(payload)
        .execute(pool)
        .await
        .expect("insert unit");
}

/// In-memory [`Unit`] for tests that skip the database layer. Ids are
/// passed in their already-encoded string form.
pub fn make_unit(id: &str, container_id: &str, containment: &str, contents: Document) -> Unit {
    Unit {
        id: id.to_string(),
        container_id: container_id.to_string(),
        containment: containment.to_string(),
        contents,
    }
}

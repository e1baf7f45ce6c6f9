use bson::Document;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Once;
use walkdir::WalkDir;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// One row of a fixture container's `Unit` table.
pub struct FixtureUnit {
    pub id: &'static [u8],
    pub container: &'static [u8],
    pub containment: &'static str,
    pub contents: Document,
}

/// Build a synthetic model container on disk with the given metadata and
/// unit rows.
pub async fn create_model_file(
    path: &Path,
    product_version: &str,
    build_version: &str,
    units: Vec<FixtureUnit>,
) {
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .expect("create fixture container");

    sqlx::query("CREATE TABLE _MetaData (_ProductVersion TEXT, _BuildVersion TEXT)")
        .execute(&pool)
        .await
        .expect("create _MetaData");
    sqlx::query(
        "CREATE TABLE Unit (UnitID BLOB, ContainerID BLOB, ContainmentName TEXT, Contents BLOB)",
    )
    .execute(&pool)
    .await
    .expect("create Unit");

    sqlx::query("INSERT INTO _MetaData (_ProductVersion, _BuildVersion) VALUES (?, ?)")
        .bind(product_version)
        .bind(build_version)
        .execute(&pool)
        .await
        .expect("insert metadata");

    for unit in units {
        let mut payload = Vec::new();
        unit.contents.to_writer(&mut payload).expect("encode contents");
        sqlx::query(
            "INSERT INTO Unit (UnitID, ContainerID, ContainmentName, Contents) VALUES (?, ?, ?, ?)",
        )
        .bind(unit.id.to_vec())
        .bind(unit.container.to_vec())
        .bind(unit.containment)
        .bind(payload)
        .execute(&pool)
        .await
        .expect("insert unit");
    }

    pool.close().await;
}

/// Relative path -> file contents for every file under `root`.
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, String> {
    let mut snapshot = BTreeMap::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walk stays under root")
            .to_string_lossy()
            .into_owned();
        let contents = std::fs::read_to_string(entry.path()).expect("read exported file");
        snapshot.insert(relative, contents);
    }
    snapshot
}

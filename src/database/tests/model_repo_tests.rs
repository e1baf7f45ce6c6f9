use super::*;
use crate::test_utils;
use bson::doc;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;

async fn setup_pool() -> SqlitePool {
    test_utils::init_test_logger();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    test_utils::create_container_schema(&pool).await;
    pool
}

#[tokio::test]
async fn test_fetch_metadata() {
    let pool = setup_pool().await;
    test_utils::insert_metadata(&pool, "10.6.1", "10.6.1.45").await;

    let (product, build) = fetch_metadata(&pool).await.unwrap();
    assert_eq!(product, "10.6.1");
    assert_eq!(build, "10.6.1.45");
}

#[tokio::test]
async fn test_fetch_metadata_empty_table() {
    let pool = setup_pool().await;

    let result = fetch_metadata(&pool).await;
    assert!(matches!(result, Err(ExportError::NotFound(_))));
}

#[tokio::test]
async fn test_fetch_units_decodes_rows_in_order() {
    let pool = setup_pool().await;
    test_utils::insert_unit(&pool, b"unit-a", b"", "", &doc! {}).await;
    test_utils::insert_unit(
        &pool,
        b"unit-b",
        b"unit-a",
        "Modules",
        &doc! { "Name": "MyModule" },
    )
    .await;

    let units = fetch_units(&pool).await.unwrap();

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].id, encode_id(b"unit-a"));
    assert_eq!(units[0].container_id, "");
    assert_eq!(units[0].containment, "");

    assert_eq!(units[1].id, encode_id(b"unit-b"));
    assert_eq!(units[1].container_id, encode_id(b"unit-a"));
    assert_eq!(units[1].containment, "Modules");
    assert_eq!(units[1].contents.get_str("Name").unwrap(), "MyModule");
}

#[tokio::test]
async fn test_fetch_units_null_columns() {
    let pool = setup_pool().await;
    let mut payload = Vec::new();
    doc! { "Name": "Root" }.to_writer(&mut payload).unwrap();
    sqlx::query("INSERT INTO Unit (UnitID, ContainerID, ContainmentName, Contents) VALUES (?, NULL, NULL, ?)")
        .bind(b"unit-a".to_vec())
        .bind(payload)
        .execute(&pool)
        .await
        .unwrap();

    let units = fetch_units(&pool).await.unwrap();
    assert_eq!(units[0].container_id, "");
    assert_eq!(units[0].containment, "");
}

#[tokio::test]
async fn test_fetch_units_bad_payload() {
    let pool = setup_pool().await;
    sqlx::query("INSERT INTO Unit (UnitID, ContainerID, ContainmentName, Contents) VALUES (?, ?, ?, ?)")
        .bind(b"unit-a".to_vec())
        .bind(b"".to_vec())
        .bind("Documents")
        .bind(b"not bson".to_vec())
        .execute(&pool)
        .await
        .unwrap();

    let result = fetch_units(&pool).await;
    assert!(matches!(result, Err(ExportError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_units_missing_table() {
    test_utils::init_test_logger();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let result = fetch_units(&pool).await;
    assert!(matches!(result, Err(ExportError::Open(_))));
}

#[tokio::test]
async fn test_open_model_missing_file() {
    let result = open_model(Path::new("/nonexistent/App.mpr")).await;
    match result {
        Err(ExportError::Open(msg)) => assert!(msg.contains("/nonexistent/App.mpr")),
        other => panic!("Expected open error, got {other:?}"),
    }
}

#[test]
fn test_encode_id_is_stable_and_one_way() {
    assert_eq!(encode_id(b""), "");
    assert_eq!(encode_id(b"unit-a"), encode_id(b"unit-a"));
    assert_ne!(encode_id(b"unit-a"), encode_id(b"unit-b"));
}

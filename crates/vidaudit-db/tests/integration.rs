//! Offline unit tests for vidaudit-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::path::PathBuf;

use vidaudit_core::{AppConfig, Product, ProductFile};
use vidaudit_db::{PoolConfig, ProductFileRow, ProductRow};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        log_level: "info".to_string(),
        output_path: PathBuf::from("videos_output.txt"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn product_row_converts_to_core_product() {
    let row = ProductRow {
        id: 42_i64,
        title: "Linen Curtain".to_string(),
        sku: None,
    };

    let product = Product::from(row);
    assert_eq!(product.id, 42);
    assert_eq!(product.title, "Linen Curtain");
    assert!(product.sku.is_none());
}

#[test]
fn product_file_row_converts_to_core_file() {
    let row = ProductFileRow {
        id: 5_i64,
        product_id: 42_i64,
        product_variant_id: Some(3),
        file_type: "image".to_string(),
        file_url: Some("media/spin.MOV".to_string()),
        is_primary: true,
        sequence: 2_i32,
    };

    let file = ProductFile::from(row);
    assert_eq!(file.id, 5);
    assert_eq!(file.product_id, 42);
    assert_eq!(file.product_variant_id, Some(3));
    assert_eq!(file.file_type, "image");
    assert!(file.is_primary);
    assert_eq!(file.sequence, 2);
    assert!(file.is_video(), "mistyped .MOV file should classify as video");
}

//! Live integration tests for vidaudit-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh Postgres database with the catalog fixture schema
//! from `<workspace-root>/migrations/`. They need `DATABASE_URL` pointing at a
//! server the test user can create databases on, so they are ignored by
//! default: run with `cargo test -p vidaudit-db -- --ignored`.

use vidaudit_db::{get_product, health_check, list_product_files, list_video_product_ids, DbError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_product(pool: &sqlx::PgPool, title: &str, sku: Option<&str>) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO products (title, sku) VALUES ($1, $2) RETURNING id")
        .bind(title)
        .bind(sku)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("insert_product failed for '{title}': {e}"))
}

async fn insert_variant(pool: &sqlx::PgPool, product_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO product_variants (product_id) VALUES ($1) RETURNING id",
    )
    .bind(product_id)
    .fetch_one(pool)
    .await
    .unwrap_or_else(|e| panic!("insert_variant failed for product {product_id}: {e}"))
}

async fn insert_file(
    pool: &sqlx::PgPool,
    product_id: i64,
    variant_id: Option<i64>,
    file_type: &str,
    file_url: Option<&str>,
    sequence: i32,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO product_files \
             (product_id, product_variant_id, file_type, file_url, is_primary, sequence) \
         VALUES ($1, $2, $3, $4, false, $5) RETURNING id",
    )
    .bind(product_id)
    .bind(variant_id)
    .bind(file_type)
    .bind(file_url)
    .bind(sequence)
    .fetch_one(pool)
    .await
    .unwrap_or_else(|e| panic!("insert_file failed for product {product_id}: {e}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn health_check_succeeds(pool: sqlx::PgPool) {
    health_check(&pool).await.expect("health_check failed");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn video_product_ids_are_distinct_and_sorted(pool: sqlx::PgPool) {
    let shirt = insert_product(&pool, "Shirt", Some("SH1")).await;
    let lamp = insert_product(&pool, "Lamp", Some("LA1")).await;
    let rug = insert_product(&pool, "Rug", None).await;

    insert_file(&pool, lamp, None, "video", Some("a.mp4"), 0).await;
    insert_file(&pool, shirt, None, "video", Some("b.mp4"), 0).await;
    insert_file(&pool, shirt, None, "video", Some("c.mp4"), 1).await;
    // Mistyped video: not part of the first pass.
    insert_file(&pool, rug, None, "image", Some("d.mp4"), 0).await;

    let ids = list_video_product_ids(&pool)
        .await
        .expect("list_video_product_ids failed");

    let mut expected = vec![shirt, lamp];
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn product_files_ordered_by_sequence_then_id(pool: sqlx::PgPool) {
    let product = insert_product(&pool, "Shirt", Some("SH1")).await;
    let variant = insert_variant(&pool, product).await;

    let late = insert_file(&pool, product, Some(variant), "video", Some("late.mp4"), 5).await;
    let first_tie = insert_file(&pool, product, None, "image", Some("x.jpg"), 1).await;
    let second_tie = insert_file(&pool, product, Some(variant), "video", None, 1).await;

    let rows = list_product_files(&pool, product)
        .await
        .expect("list_product_files failed");

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first_tie, second_tie, late]);
    assert_eq!(rows[1].product_variant_id, Some(variant));
    assert!(rows[1].file_url.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn get_product_returns_row(pool: sqlx::PgPool) {
    let id = insert_product(&pool, "Shirt", Some("SH1")).await;

    let row = get_product(&pool, id).await.expect("get_product failed");
    assert_eq!(row.title, "Shirt");
    assert_eq!(row.sku.as_deref(), Some("SH1"));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn get_product_missing_is_not_found(pool: sqlx::PgPool) {
    let err = get_product(&pool, 999_999)
        .await
        .expect_err("expected NotFound for unknown id");
    assert!(matches!(err, DbError::NotFound), "got: {err:?}");
}

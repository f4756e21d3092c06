//! Database reads for the `product_files` table.

use sqlx::PgPool;
use vidaudit_core::VIDEO_FILE_TYPE;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `product_files` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductFileRow {
    pub id: i64,
    pub product_id: i64,
    /// `NULL` when the file is attached to the product as a whole.
    pub product_variant_id: Option<i64>,
    pub file_type: String,
    pub file_url: Option<String>,
    pub is_primary: bool,
    pub sequence: i32,
}

impl From<ProductFileRow> for vidaudit_core::ProductFile {
    fn from(row: ProductFileRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            product_variant_id: row.product_variant_id,
            file_type: row.file_type,
            file_url: row.file_url,
            is_primary: row.is_primary,
            sequence: row.sequence,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns the distinct ids of products owning at least one file whose
/// declared type is `video`, ascending.
///
/// Only the declared type is consulted here. Files recognised as videos by
/// URL extension alone are picked up later, per product.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_video_product_ids(pool: &PgPool) -> Result<Vec<i64>, DbError> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT DISTINCT product_id \
         FROM product_files \
         WHERE file_type = $1 \
         ORDER BY product_id",
    )
    .bind(VIDEO_FILE_TYPE)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Returns every file attached to a product, ordered by `sequence ASC, id ASC`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_product_files(
    pool: &PgPool,
    product_id: i64,
) -> Result<Vec<ProductFileRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductFileRow>(
        "SELECT id, product_id, product_variant_id, file_type, file_url, is_primary, sequence \
         FROM product_files \
         WHERE product_id = $1 \
         ORDER BY sequence, id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

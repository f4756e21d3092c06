//! Database reads for the `products` table.

use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `products` table, narrowed to the columns the report uses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    /// `NULL` for products that were never assigned a SKU.
    pub sku: Option<String>,
}

impl From<ProductRow> for vidaudit_core::Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            sku: row.sku,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Fetches a single product by primary key.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no product has this id (for example it
/// was deleted after its files were listed), or [`DbError::Sqlx`] if the
/// query fails.
pub async fn get_product(pool: &PgPool, product_id: i64) -> Result<ProductRow, DbError> {
    sqlx::query_as::<_, ProductRow>(
        "SELECT id, title, sku \
         FROM products \
         WHERE id = $1",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)
}

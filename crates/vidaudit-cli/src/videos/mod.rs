//! The product video report.
//!
//! Lists every product that owns a `video`-typed file, then writes each one's
//! video files grouped by variant. Runs strictly one query at a time; any
//! storage, missing-record, or I/O failure aborts the run.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use vidaudit_core::{Product, ProductFile, ProductVideos, ReportSummary};
use vidaudit_db::DbError;

/// Read access to the catalog records the report needs.
pub(crate) trait CatalogStore {
    /// Owners of files whose declared type is `video`. May repeat ids.
    async fn video_product_ids(&self) -> Result<Vec<i64>, DbError>;

    /// A single product; [`DbError::NotFound`] if it no longer exists.
    async fn product(&self, product_id: i64) -> Result<Product, DbError>;

    /// All files of a product, videos or not.
    async fn product_files(&self, product_id: i64) -> Result<Vec<ProductFile>, DbError>;
}

impl CatalogStore for sqlx::PgPool {
    async fn video_product_ids(&self) -> Result<Vec<i64>, DbError> {
        vidaudit_db::list_video_product_ids(self).await
    }

    async fn product(&self, product_id: i64) -> Result<Product, DbError> {
        Ok(vidaudit_db::get_product(self, product_id).await?.into())
    }

    async fn product_files(&self, product_id: i64) -> Result<Vec<ProductFile>, DbError> {
        let rows = vidaudit_db::list_product_files(self, product_id).await?;
        Ok(rows.into_iter().map(ProductFile::from).collect())
    }
}

/// Write the video report for everything in `store` to `output_path`,
/// replacing any existing file.
///
/// Products are written in ascending id order so that repeated runs over an
/// unchanged catalog produce identical files.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written, if a
/// query fails, or if a listed product cannot be found. The file may be left
/// partially written.
pub(crate) async fn run_videos_report<S: CatalogStore>(
    store: &S,
    output_path: &Path,
) -> anyhow::Result<ReportSummary> {
    tracing::info!(path = %output_path.display(), "writing video report");

    let file = File::create(output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    let product_ids: BTreeSet<i64> = store
        .video_product_ids()
        .await
        .context("failed to list products with video files")?
        .into_iter()
        .collect();

    vidaudit_core::write_summary_header(&mut out, product_ids.len())
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    let mut summary = ReportSummary::default();
    for product_id in product_ids {
        let product = store
            .product(product_id)
            .await
            .with_context(|| format!("failed to load product {product_id}"))?;
        let files = store
            .product_files(product_id)
            .await
            .with_context(|| format!("failed to load files for product {product_id}"))?;

        let block = ProductVideos::from_files(product, files);
        tracing::debug!(product_id, videos = block.total_videos(), "grouped product videos");
        for group in block.multi_video_variants() {
            tracing::debug!(
                product_id,
                variant_id = ?group.variant_id,
                videos = group.video_count(),
                "variant has more than one video"
            );
        }

        vidaudit_core::write_product_block(&mut out, &block)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        summary.record(&block);
    }

    out.flush()
        .with_context(|| format!("failed to flush {}", output_path.display()))?;

    tracing::info!(
        products = summary.products,
        videos = summary.videos,
        multi_video_variants = summary.multi_video_variants,
        "video report complete"
    );

    Ok(summary)
}

#[cfg(test)]
#[path = "videos_test.rs"]
mod tests;

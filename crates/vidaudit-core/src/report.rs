//! Per-product video grouping and the plain-text report layout.
//!
//! The layout is line-oriented and fixed:
//!
//! ```text
//! Total products with videos: <N>
//!
//! Product: <title> (SKU: <sku>)
//!   Total Videos for this product: <N>
//!   Variant ID <variant_id> has <N> video records.
//!     - ID: <id>, URL: <url>, Primary: <bool>, Seq: <n>
//! ```

use std::io::{self, Write};

use crate::media::{Product, ProductFile};

/// Rendered in place of an absent variant id, URL, or SKU.
pub const MISSING_VALUE: &str = "None";

/// Video files sharing one variant id (or sharing the absence of one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    pub variant_id: Option<i64>,
    /// Ordered by `(sequence, id)`.
    pub files: Vec<ProductFile>,
}

impl VariantGroup {
    #[must_use]
    pub fn video_count(&self) -> usize {
        self.files.len()
    }

    /// A variant is expected to carry at most one video; the report exists to
    /// find the ones that do not.
    #[must_use]
    pub fn has_multiple_videos(&self) -> bool {
        self.files.len() > 1
    }
}

/// The video breakdown for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVideos {
    pub product: Product,
    /// In first-seen order over the `(sequence, id)`-sorted file list.
    pub groups: Vec<VariantGroup>,
}

impl ProductVideos {
    /// Classify and group every file of `product`.
    ///
    /// Files are sorted by `(sequence, id)` first, so callers may pass them in
    /// any order. Non-video files are dropped.
    #[must_use]
    pub fn from_files(product: Product, mut files: Vec<ProductFile>) -> Self {
        files.sort_by_key(|f| (f.sequence, f.id));

        let mut groups: Vec<VariantGroup> = Vec::new();
        for file in files.into_iter().filter(ProductFile::is_video) {
            match groups
                .iter_mut()
                .find(|g| g.variant_id == file.product_variant_id)
            {
                Some(group) => group.files.push(file),
                None => groups.push(VariantGroup {
                    variant_id: file.product_variant_id,
                    files: vec![file],
                }),
            }
        }

        Self { product, groups }
    }

    #[must_use]
    pub fn total_videos(&self) -> usize {
        self.groups.iter().map(VariantGroup::video_count).sum()
    }

    pub fn multi_video_variants(&self) -> impl Iterator<Item = &VariantGroup> {
        self.groups.iter().filter(|g| g.has_multiple_videos())
    }
}

/// Totals accumulated over a report run. Logged, never written to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub products: usize,
    pub videos: usize,
    pub multi_video_variants: usize,
}

impl ReportSummary {
    pub fn record(&mut self, block: &ProductVideos) {
        self.products += 1;
        self.videos += block.total_videos();
        self.multi_video_variants += block.multi_video_variants().count();
    }
}

/// Write the leading `Total products with videos` line.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_summary_header<W: Write>(out: &mut W, product_count: usize) -> io::Result<()> {
    writeln!(out, "Total products with videos: {product_count}")
}

/// Write one product block, preceded by a blank line.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_product_block<W: Write>(out: &mut W, block: &ProductVideos) -> io::Result<()> {
    let product = &block.product;
    writeln!(out)?;
    writeln!(
        out,
        "Product: {} (SKU: {})",
        product.title,
        product.sku.as_deref().unwrap_or(MISSING_VALUE)
    )?;
    writeln!(
        out,
        "  Total Videos for this product: {}",
        block.total_videos()
    )?;

    for group in &block.groups {
        writeln!(
            out,
            "  Variant ID {} has {} video records.",
            fmt_variant_id(group.variant_id),
            group.video_count()
        )?;
        for file in &group.files {
            writeln!(
                out,
                "    - ID: {}, URL: {}, Primary: {}, Seq: {}",
                file.id,
                file.file_url.as_deref().unwrap_or(MISSING_VALUE),
                fmt_flag(file.is_primary),
                file.sequence
            )?;
        }
    }

    Ok(())
}

fn fmt_variant_id(variant_id: Option<i64>) -> String {
    variant_id.map_or_else(|| MISSING_VALUE.to_string(), |id| id.to_string())
}

// Capitalized to stay comparable with reports produced by earlier tooling.
fn fmt_flag(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

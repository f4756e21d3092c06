//! Catalog records read by the video report and the rule deciding which
//! product files count as videos.

/// Declared `file_type` of a product file that is a video.
pub const VIDEO_FILE_TYPE: &str = "video";

/// URL suffixes treated as video files regardless of the declared type.
/// Compared against the lowercased URL.
pub const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".mov", ".webm"];

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// Nullable in the catalog schema.
    pub sku: Option<String>,
}

/// A media asset attached to a product, optionally scoped to one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFile {
    pub id: i64,
    pub product_id: i64,
    pub product_variant_id: Option<i64>,
    pub file_type: String,
    pub file_url: Option<String>,
    pub is_primary: bool,
    pub sequence: i32,
}

impl ProductFile {
    /// Whether this file belongs in the video report.
    ///
    /// True when the declared type is `video` OR the URL carries a video
    /// extension. Both checks are needed: some records are typed `image`
    /// while pointing at an `.mp4`.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.file_type == VIDEO_FILE_TYPE
            || self.file_url.as_deref().is_some_and(has_video_extension)
    }
}

/// Case-insensitive check for one of [`VIDEO_EXTENSIONS`] at the end of `url`.
#[must_use]
pub fn has_video_extension(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

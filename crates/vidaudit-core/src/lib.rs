pub mod app_config;
pub mod config;
pub mod media;
pub mod report;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use media::{has_video_extension, Product, ProductFile, VIDEO_EXTENSIONS, VIDEO_FILE_TYPE};
pub use report::{
    write_product_block, write_summary_header, ProductVideos, ReportSummary, VariantGroup,
    MISSING_VALUE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

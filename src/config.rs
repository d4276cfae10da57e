//! Runtime configuration.
//!
//! Every setting is a CLI flag with an environment default, loaded from the
//! process environment (and a `.env` file when present) at startup.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::catalog::CatalogConfig;

/// Catalog API connection settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Catalog API base URL
    #[arg(
        long,
        env = "LEPIX_API_BASE_URL",
        default_value = "https://localhost:7146"
    )]
    pub base_url: String,

    /// Tenant id sent as the X-Empresa-Id header
    #[arg(long, env = "LEPIX_TENANT_ID")]
    pub tenant_id: Option<i64>,
}

impl ApiConfig {
    /// Connection settings for the catalog client.
    #[must_use]
    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url.clone(),
            tenant_id: self.tenant_id,
        }
    }
}

/// Cart persistence settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the persisted cart document
    #[arg(long = "storage-dir", env = "LEPIX_STORAGE_DIR", default_value = ".lepix")]
    pub dir: PathBuf,
}

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level when RUST_LOG is not set
    #[arg(long, env = "LEPIX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LEPIX_LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Compact,

    /// Structured JSON output.
    Json,
}

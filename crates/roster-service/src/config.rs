//! Configuration for the roster service
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where processed photos live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoStoreKind {
    /// Embedded in the record as a JPEG data URL
    Inline,
    /// Written under the media directory and referenced by URL
    Blob,
}

impl FromStr for PhotoStoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(PhotoStoreKind::Inline),
            "blob" => Ok(PhotoStoreKind::Blob),
            other => anyhow::bail!("PHOTO_STORE must be 'inline' or 'blob', got '{other}'"),
        }
    }
}

/// Where codenames come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodenameMode {
    /// The built-in template catalog (codename + achievement + story)
    Templates,
    /// Generated names with no backstory
    Synthetic,
}

impl FromStr for CodenameMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "templates" => Ok(CodenameMode::Templates),
            "synthetic" => Ok(CodenameMode::Synthetic),
            other => anyhow::bail!("CODENAME_MODE must be 'templates' or 'synthetic', got '{other}'"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,

    /// API server host
    pub api_host: String,

    /// API server port
    pub api_port: u16,

    /// Use the in-memory store instead of Redis
    pub mock_mode: bool,

    /// Photo storage backend
    pub photo_store: PhotoStoreKind,

    /// Directory for blob-stored photos
    pub media_dir: PathBuf,

    /// URL prefix under which blob-stored photos are served
    pub media_public_base: String,

    /// Codename assignment mode
    pub codename_mode: CodenameMode,

    /// Upload size cap in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let config = Config {
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),

            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "8084".to_string())
                .parse()
                .context("Invalid API_PORT")?,

            mock_mode: env::var("MOCK_MODE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),

            photo_store: env::var("PHOTO_STORE")
                .unwrap_or_else(|_| "inline".to_string())
                .parse()?,

            media_dir: env::var("MEDIA_DIR")
                .unwrap_or_else(|_| "./data/media".to_string())
                .into(),

            media_public_base: env::var("MEDIA_PUBLIC_BASE")
                .unwrap_or_else(|_| "/media".to_string()),

            codename_mode: env::var("CODENAME_MODE")
                .unwrap_or_else(|_| "templates".to_string())
                .parse()?,

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "8388608".to_string())
                .parse()
                .context("Invalid MAX_UPLOAD_BYTES")?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            anyhow::bail!("API_PORT must be greater than 0");
        }

        if self.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than 0");
        }

        if self.photo_store == PhotoStoreKind::Blob && self.media_public_base.is_empty() {
            anyhow::bail!("MEDIA_PUBLIC_BASE must not be empty when PHOTO_STORE is 'blob'");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// Ensure the media directory exists when blob storage is active
    pub fn ensure_directories(&self) -> Result<()> {
        if self.photo_store == PhotoStoreKind::Blob {
            std::fs::create_dir_all(&self.media_dir).with_context(|| {
                format!("Failed to create media directory: {}", self.media_dir.display())
            })?;
        }

        Ok(())
    }
}

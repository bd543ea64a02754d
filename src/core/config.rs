use std::env;
use std::path::PathBuf;

use crate::core::error::{NikError, Result};

/// Location of the region dataset bundled with the crate.
pub const BUNDLED_REGION_DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/regions.json");

/// Settings for loading the region dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NikConfig {
    /// Path of the JSON dataset with `provinsi`, `kabkot` and `kecamatan` keys
    pub region_data_path: PathBuf,
    /// Reject district entries that lack the `" -- "` postal code separator
    pub strict_districts: bool,
}

impl Default for NikConfig {
    fn default() -> Self {
        Self {
            region_data_path: PathBuf::from(BUNDLED_REGION_DATA_PATH),
            strict_districts: false,
        }
    }
}

impl NikConfig {
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine, anything else is worth a warning
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        let region_data_path = env::var("NIK_REGION_DATA_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(BUNDLED_REGION_DATA_PATH));

        let strict_districts = match env::var("NIK_STRICT_DISTRICTS") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                NikError::Config("NIK_STRICT_DISTRICTS must be true or false".to_string())
            })?,
            Err(_) => false,
        };

        Ok(Self {
            region_data_path,
            strict_districts,
        })
    }

    pub fn with_region_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.region_data_path = path.into();
        self
    }

    pub fn with_strict_districts(mut self, strict: bool) -> Self {
        self.strict_districts = strict;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

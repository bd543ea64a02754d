use std::fs;

use crate::core::config::NikConfig;
use crate::core::error::{NikError, Result};
use crate::features::nik::models::RegionTable;

/// Service for loading the region dataset from disk
#[derive(Debug, Clone)]
pub struct RegionDataService {
    config: NikConfig,
}

impl RegionDataService {
    pub fn new(config: NikConfig) -> Self {
        Self { config }
    }

    /// Read and parse the dataset; every call hits the file again.
    pub fn load(&self) -> Result<RegionTable> {
        let path = &self.config.region_data_path;
        tracing::debug!("Loading region data from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read region data {}: {:?}", path.display(), e);
            NikError::Io {
                path: path.clone(),
                source: e,
            }
        })?;

        let table = RegionTable::from_json_str(&contents, self.config.strict_districts)
            .map_err(|e| {
                tracing::error!("Failed to parse region data {}: {}", path.display(), e);
                e
            })?;

        tracing::info!(
            "Region data loaded: provinces={}, cities={}, districts={}",
            table.province_count(),
            table.city_count(),
            table.district_count()
        );

        Ok(table)
    }
}

use chrono::{Datelike, Local};

use crate::core::config::NikConfig;
use crate::core::error::Result;
use crate::features::nik::dtos::{FullRegionDto, ParsedNikDto};
use crate::features::nik::models::{clean, NikCode, RegionTable};
use crate::features::nik::services::{Nik, RegionDataService};

/// Stateful NIK parser.
///
/// Keeps the current code and, once loaded, the region table. Field access goes
/// through [`NikParser::decode`], which hands out a [`Nik`] view over the
/// current state with this year as the century reference.
///
/// ```no_run
/// use nik_parser::NikParser;
///
/// let mut parser = NikParser::new(true)?;
/// let parsed = parser.parse("3171.05.010199.0001")?;
/// assert!(parsed.valid);
/// # Ok::<(), nik_parser::NikError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NikParser {
    config: NikConfig,
    code: NikCode,
    regions: Option<RegionTable>,
}

impl NikParser {
    /// Parser using the bundled dataset, loaded right away when `autoload` is set.
    pub fn new(autoload: bool) -> Result<Self> {
        Self::with_config(NikConfig::default(), autoload)
    }

    pub fn with_config(config: NikConfig, autoload: bool) -> Result<Self> {
        let mut parser = Self {
            config,
            ..Self::default()
        };
        parser.autoload_region(autoload)?;
        Ok(parser)
    }

    /// Parser configured from `NIK_REGION_DATA_PATH` / `NIK_STRICT_DISTRICTS`.
    pub fn from_env(autoload: bool) -> Result<Self> {
        Self::with_config(NikConfig::from_env()?, autoload)
    }

    /// Parser around a table built elsewhere; nothing is read from disk.
    pub fn with_regions(regions: RegionTable) -> Self {
        Self {
            regions: Some(regions),
            ..Self::default()
        }
    }

    /// Store a new code. An empty `raw` leaves the current code untouched.
    pub fn set_code(&mut self, raw: &str) -> &mut Self {
        if raw.is_empty() {
            tracing::debug!("Ignoring empty NIK, keeping the current code");
            return self;
        }
        self.code = NikCode::new(raw);
        self
    }

    pub fn code(&self) -> &NikCode {
        &self.code
    }

    pub fn clean(raw: &str) -> String {
        clean(raw)
    }

    pub fn length(&self) -> usize {
        self.code.len()
    }

    pub fn is_valid(&self) -> bool {
        self.decode().is_valid()
    }

    pub fn decode(&self) -> Nik<'_> {
        self.decode_at(Local::now().year())
    }

    /// Like [`NikParser::decode`] with an explicit year for century inference.
    pub fn decode_at(&self, reference_year: i32) -> Nik<'_> {
        Nik::new(&self.code, self.regions.as_ref(), reference_year)
    }

    // ==================== Region Data ====================

    pub fn regions(&self) -> Option<&RegionTable> {
        self.regions.as_ref()
    }

    pub fn is_region_loaded(&self) -> bool {
        self.regions.as_ref().is_some_and(|table| !table.is_empty())
    }

    /// Re-read the dataset, replacing any table already held.
    pub fn load_region_data(&mut self) -> Result<&mut Self> {
        let table = RegionDataService::new(self.config.clone()).load()?;
        self.regions = Some(table);
        Ok(self)
    }

    pub fn autoload_region(&mut self, toggle: bool) -> Result<&mut Self> {
        if toggle {
            self.load_region_data()?;
        }
        Ok(self)
    }

    pub fn load_missing_region(&mut self) -> Result<&mut Self> {
        if !self.is_region_loaded() {
            self.load_region_data()?;
        }
        Ok(self)
    }

    // ==================== Results ====================

    pub fn full_region(&mut self) -> Result<FullRegionDto> {
        self.load_missing_region()?;
        Ok(self.decode().full_region())
    }

    pub fn to_result(&mut self) -> Result<ParsedNikDto> {
        self.load_missing_region()?;
        Ok(self.decode().to_result())
    }

    pub fn parse(&mut self, raw: &str) -> Result<ParsedNikDto> {
        self.set_code(raw).to_result()
    }

    pub fn to_json(&mut self) -> Result<String> {
        let result = self.to_result()?;
        Ok(serde_json::to_string(&result)?)
    }
}

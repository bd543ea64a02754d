use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{NikError, Result};
use crate::shared::constants::{
    CITY_SECTION, DATASET_CITY_KEY, DATASET_DISTRICT_KEY, DATASET_PROVINCE_KEY,
    DISTRICT_SECTION, DISTRICT_SEPARATOR, PROVINCE_SECTION,
};
use crate::shared::lookup;

/// Region dataset as stored on disk
#[derive(Debug, Deserialize)]
struct RegionDataset {
    #[serde(rename = "provinsi")]
    province: BTreeMap<String, String>,
    #[serde(rename = "kabkot")]
    city: BTreeMap<String, String>,
    #[serde(rename = "kecamatan")]
    district: BTreeMap<String, String>,
}

/// Immutable lookup table of Indonesian region names.
///
/// Three sections keyed by the integer value of the region code:
///
/// | Section | Code | Value |
/// |---------|------|-------|
/// | `province` | 2 digits (`31`) | province name |
/// | `city` | 4 digits (`3171`) | city/regency name |
/// | `district` | 6 digits (`317105`) | `"<district> -- <postal code>"` |
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RegionTable {
    entries: Value,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::from_sections(BTreeMap::new(), BTreeMap::new(), BTreeMap::new())
    }
}

impl RegionTable {
    /// Parse the `provinsi` / `kabkot` / `kecamatan` JSON dataset.
    ///
    /// With `strict_districts`, a district entry without the postal code
    /// separator is an error; otherwise it is kept and only logged.
    pub fn from_json_str(json: &str, strict_districts: bool) -> Result<Self> {
        let dataset: RegionDataset = serde_json::from_str(json)?;

        let table = Self::from_sections(
            canonical_keys(DATASET_PROVINCE_KEY, dataset.province)?,
            canonical_keys(DATASET_CITY_KEY, dataset.city)?,
            canonical_keys(DATASET_DISTRICT_KEY, dataset.district)?,
        );

        let malformed = table.malformed_districts();
        if let Some(&(code, entry)) = malformed.first() {
            if strict_districts {
                return Err(NikError::MalformedDistrict {
                    code,
                    entry: entry.to_string(),
                });
            }
            tracing::warn!(
                "{} district entries have no postal code separator (first: {})",
                malformed.len(),
                code
            );
        }

        Ok(table)
    }

    pub fn from_sections(
        province: BTreeMap<u32, String>,
        city: BTreeMap<u32, String>,
        district: BTreeMap<u32, String>,
    ) -> Self {
        let mut entries = Map::new();
        entries.insert(PROVINCE_SECTION.to_string(), section_value(province));
        entries.insert(CITY_SECTION.to_string(), section_value(city));
        entries.insert(DISTRICT_SECTION.to_string(), section_value(district));
        Self {
            entries: Value::Object(entries),
        }
    }

    pub fn province(&self, code: i64) -> Option<&str> {
        self.get(PROVINCE_SECTION, code)
    }

    pub fn city(&self, code: i64) -> Option<&str> {
        self.get(CITY_SECTION, code)
    }

    /// Raw `"<district> -- <postal code>"` entry
    pub fn district_entry(&self, code: i64) -> Option<&str> {
        self.get(DISTRICT_SECTION, code)
    }

    pub fn province_count(&self) -> usize {
        self.section_len(PROVINCE_SECTION)
    }

    pub fn city_count(&self) -> usize {
        self.section_len(CITY_SECTION)
    }

    pub fn district_count(&self) -> usize {
        self.section_len(DISTRICT_SECTION)
    }

    pub fn is_empty(&self) -> bool {
        self.province_count() == 0 && self.city_count() == 0 && self.district_count() == 0
    }

    /// District entries that lack the postal code separator, ordered by code
    pub fn malformed_districts(&self) -> Vec<(u32, &str)> {
        let Some(section) = self.section(DISTRICT_SECTION) else {
            return Vec::new();
        };
        let mut malformed: Vec<(u32, &str)> = section
            .iter()
            .filter_map(|(code, entry)| {
                let entry = entry.as_str()?;
                let code = code.parse::<u32>().ok()?;
                (!entry.contains(DISTRICT_SEPARATOR)).then_some((code, entry))
            })
            .collect();
        malformed.sort_by_key(|&(code, _)| code);
        malformed
    }

    fn get(&self, section: &str, code: i64) -> Option<&str> {
        lookup::get_str(&self.entries, &format!("{section}.{code}"))
    }

    fn section(&self, section: &str) -> Option<&Map<String, Value>> {
        lookup::get(&self.entries, Some(section), &Value::Null).as_object()
    }

    fn section_len(&self, section: &str) -> usize {
        self.section(section).map_or(0, Map::len)
    }
}

/// Split a district entry into its name (before the separator).
///
/// An entry without the separator is all name.
pub fn split_district(entry: &str) -> Option<&str> {
    entry.split(DISTRICT_SEPARATOR).next()
}

/// Split a district entry into its postal code (after the separator).
pub fn split_postal_code(entry: &str) -> Option<&str> {
    entry.split(DISTRICT_SEPARATOR).nth(1)
}

fn canonical_keys(
    dataset_key: &str,
    section: BTreeMap<String, String>,
) -> Result<BTreeMap<u32, String>> {
    let mut canonical = BTreeMap::new();
    for (code, name) in section {
        let numeric = code.trim().parse::<u32>().map_err(|_| {
            NikError::MalformedDataset(format!(
                "'{}' contains non-numeric region code '{}'",
                dataset_key, code
            ))
        })?;
        if canonical.insert(numeric, name).is_some() {
            return Err(NikError::MalformedDataset(format!(
                "'{}' contains region code {} more than once",
                dataset_key, numeric
            )));
        }
    }
    Ok(canonical)
}

fn section_value(section: BTreeMap<u32, String>) -> Value {
    Value::Object(
        section
            .into_iter()
            .map(|(code, name)| (code.to_string(), Value::String(name)))
            .collect(),
    )
}

use serde::{Deserialize, Serialize};

/// Raw region code together with its resolved name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPartDto {
    pub code: String,
    pub name: Option<String>,
}

/// Postal code of the district; there is no name to resolve for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeDto {
    pub code: Option<String>,
}

/// Region breakdown of a NIK
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRegionDto {
    pub province: RegionPartDto,
    pub city: RegionPartDto,
    pub district: RegionPartDto,
    pub postal_code: PostalCodeDto,
}

/// Everything decoded from a NIK.
///
/// Serializes to a flat JSON object:
///
/// ```json
/// {
///   "valid": true,
///   "nik": "3171050101990001",
///   "birth_date": "01-01-1999",
///   "birth_city": "Kota Adm. Jakarta Selatan",
///   "unique_code": "0001",
///   "gender": "Laki-Laki",
///   "province": { "code": "31", "name": "DKI Jakarta" },
///   "city": { "code": "3171", "name": "Kota Adm. Jakarta Selatan" },
///   "district": { "code": "317105", "name": "Kebayoran Lama" },
///   "postal_code": { "code": "12240" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNikDto {
    pub valid: bool,
    pub nik: String,
    /// `DD-MM-YYYY`, absent when the encoded date does not exist
    pub birth_date: Option<String>,
    pub birth_city: Option<String>,
    pub unique_code: String,
    pub gender: String,
    #[serde(flatten)]
    pub region: FullRegionDto,
}

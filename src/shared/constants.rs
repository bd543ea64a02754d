/// Number of characters in a well-formed NIK
pub const NIK_LENGTH: usize = 16;

/// Offset added to the day of birth for female subjects
pub const GENDER_BIAS: i64 = 40;

/// Number of trailing characters holding the sequence number
pub const SEQUENCE_LENGTH: usize = 4;

/// Output format of the birth date in the parsed result
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Separator between district name and postal code in a district entry
pub const DISTRICT_SEPARATOR: &str = " -- ";

// =============================================================================
// REGION DATASET KEYS
// =============================================================================

/// Dataset key holding province names
pub const DATASET_PROVINCE_KEY: &str = "provinsi";

/// Dataset key holding city/regency names
pub const DATASET_CITY_KEY: &str = "kabkot";

/// Dataset key holding "district -- postal code" entries
pub const DATASET_DISTRICT_KEY: &str = "kecamatan";

// =============================================================================
// REGION TABLE SECTIONS
// =============================================================================

pub const PROVINCE_SECTION: &str = "province";

pub const CITY_SECTION: &str = "city";

pub const DISTRICT_SECTION: &str = "district";

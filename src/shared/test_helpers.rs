#[cfg(test)]
use crate::features::nik::models::RegionTable;

#[cfg(test)]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dataset used across the unit tests: two Jakarta districts and a
/// Yogyakarta district whose entry has no postal code.
#[cfg(test)]
pub const SAMPLE_REGION_JSON: &str = r#"{
    "provinsi": { "31": "DKI Jakarta", "34": "DI Yogyakarta" },
    "kabkot": { "3171": "Kota Adm. Jakarta Selatan", "3175": "Kota Adm. Jakarta Utara", "3471": "Kota Yogyakarta" },
    "kecamatan": {
        "317105": "Kebayoran Lama -- 12240",
        "317502": "Tanjung Priok -- 14310",
        "347101": "Mantrijeron"
    }
}"#;

#[cfg(test)]
pub fn sample_region_table() -> RegionTable {
    RegionTable::from_json_str(SAMPLE_REGION_JSON, false).expect("sample dataset parses")
}

#[cfg(test)]
#[allow(dead_code)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

//! # nik-parser
//!
//! Decoder for Indonesian National Identity Numbers (Nomor Induk Kependudukan).
//! Extracts region codes, birth date, gender and sequence number from a NIK and
//! resolves region names and postal codes from a bundled region dataset.
pub mod core;
pub mod features;
pub mod shared;

// Re-export the main types for convenience
pub use crate::core::{
    config::NikConfig,
    error::{NikError, Result},
};
pub use crate::features::nik::{
    century_for,
    dtos::{FullRegionDto, ParsedNikDto, PostalCodeDto, RegionPartDto},
    models::{Gender, GenderOption, NikCode, RegionTable},
    Nik, NikParser, RegionDataService,
};

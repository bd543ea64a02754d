//! Indonesian National Identity Number (NIK) decoding.
//!
//! A NIK is 16 digits:
//!
//! | Digits | Meaning |
//! |--------|---------|
//! | 1-2 | Province (Provinsi) |
//! | 3-4 | City/Regency (Kabupaten/Kota) |
//! | 5-6 | District (Kecamatan) |
//! | 7-12 | Birth date `DDMMYY`, with 40 added to `DD` for women |
//! | 13-16 | Sequence number |
//!
//! Region names come from a static dataset (`provinsi`, `kabkot`, `kecamatan`)
//! loaded into a [`models::RegionTable`].

pub mod dtos;
pub mod models;
pub mod services;

pub use services::{century_for, Nik, NikParser, RegionDataService};

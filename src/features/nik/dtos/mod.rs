mod nik_dto;

pub use nik_dto::{FullRegionDto, ParsedNikDto, PostalCodeDto, RegionPartDto};

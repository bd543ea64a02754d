mod nik_decoder;
mod nik_parser;
mod region_data_service;

pub use nik_decoder::{century_for, Nik};
pub use nik_parser::NikParser;
pub use region_data_service::RegionDataService;

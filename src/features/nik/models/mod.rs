mod gender;
mod nik_code;
mod region_table;

pub use gender::{gender_by_key, is_female, is_male, list_gender, Gender, GenderOption};
pub use nik_code::{clean, leading_int, NikCode};
pub(crate) use nik_code::substring;
pub use region_table::{split_district, split_postal_code, RegionTable};

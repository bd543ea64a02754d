pub mod constants;
pub mod lookup;
pub mod test_helpers;
pub mod validation;

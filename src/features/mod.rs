pub mod nik;

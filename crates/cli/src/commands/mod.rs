pub mod compress;
pub mod table;

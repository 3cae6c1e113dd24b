pub mod csv_row;
pub mod error;
pub mod property;

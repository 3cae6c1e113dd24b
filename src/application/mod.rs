pub mod use_cases;

pub use use_cases::batch_assembler::assemble_batch;
pub use use_cases::property_name::property_name;
pub use use_cases::row_validator::validate_row;

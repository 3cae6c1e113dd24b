pub mod batch_assembler;
pub mod property_name;
pub mod row_validator;

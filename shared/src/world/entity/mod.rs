pub mod duplicate_validator;
pub mod error;
pub mod located_id;
pub mod stable_id;
pub mod stable_id_allocator;

pub mod query;
pub mod resource_id;
pub mod resource_set_message;
pub mod tracker;

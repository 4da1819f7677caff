pub mod assertions;
pub mod entity_builder;
pub mod frame_exchange;

pub use entity_builder::{shared_value, TestEntityBuilder};
pub use frame_exchange::{deliver_to_authoring, deliver_to_remote, tick_and_exchange};

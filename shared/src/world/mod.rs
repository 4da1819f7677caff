pub mod content;
pub mod entity;
pub mod error;
pub mod mirror_world;
pub mod snapshot;

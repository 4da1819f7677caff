pub mod baseline;
pub mod builder;
pub mod change_set;
pub mod comparator;
pub mod sharded;

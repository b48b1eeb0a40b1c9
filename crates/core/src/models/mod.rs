pub mod catalog;
pub mod fixtures;
pub mod schedule;

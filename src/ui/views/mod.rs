pub mod quiz;
pub mod start;
pub mod summary;

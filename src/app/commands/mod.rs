pub mod catalog;
pub mod summary;

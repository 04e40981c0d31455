pub mod list;
pub mod resolution;

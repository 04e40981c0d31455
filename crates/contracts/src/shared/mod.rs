pub mod config;
pub mod editor;
pub mod envelope;
pub mod reference;

//! Client-side editors for ordered and weighted collections

pub mod collection;
pub mod error;
pub mod instance;
pub mod percentage;

pub use collection::{CollectionEditor, EditorEntry, EntryField, EntryKind, FieldChange};
pub use error::EditorError;
pub use instance::InstanceId;

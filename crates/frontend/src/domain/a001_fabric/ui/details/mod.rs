//! Fabric create / edit form.
//!
//! - view_model.rs: form state, composition editor and commands
//! - view.rs: the modal form

mod view;
mod view_model;

pub use view::FabricDetails;
pub use view_model::FabricDetailsViewModel;

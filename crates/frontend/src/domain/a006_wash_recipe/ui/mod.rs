//! Wash-recipe workspace page.
//!
//! - view_model.rs: the workspace signal, reference lists and intents
//! - view.rs: the steps / processes table
//! - attachment.rs: the "add chemical" modal

mod attachment;
mod view;
mod view_model;

pub use view::WashRecipePage;
pub use view_model::WashRecipeViewModel;

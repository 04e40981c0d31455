mod view;
mod view_model;

pub use view::DefectResolutionModal;
pub use view_model::{resolution_requests, DefectResolutionViewModel, ResolutionForm};

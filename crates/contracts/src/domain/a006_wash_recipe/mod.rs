pub mod aggregate;
pub mod attachment;
pub mod workspace;

pub use aggregate::{ChemicalUsage, ProcessEntry, Step, Unit, WashRecipe, WorkspaceItem};
pub use attachment::{AttachmentTarget, ChemicalDraft, NewChemical};
pub use workspace::WashRecipeWorkspace;

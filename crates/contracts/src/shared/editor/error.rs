use super::collection::EntryKind;
use thiserror::Error;

/// Отказ редактора коллекции. Состояние при отказе не меняется.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Select a {kind} for entry #{sequence} before adding another one")]
    IncompletePriorEntry { kind: EntryKind, sequence: u32 },

    #[error("Sequence {0} is already taken")]
    SequenceCollision(u32),

    #[error("No entry at position {0}")]
    IndexOutOfRange(usize),

    #[error("Field '{0}' is not editable on this entry")]
    UnsupportedField(&'static str),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("{field} must be a non-negative number")]
    InvalidNumber { field: &'static str },

    #[error("A {kind} must be selected")]
    MissingReference { kind: EntryKind },

    #[error("Unknown reference '{0}'")]
    UnknownReference(String),

    #[error("This {kind} entry no longer exists")]
    EntryNotFound { kind: EntryKind },

    #[error("Step not found")]
    StepNotFound,

    #[error("Select a step before adding chemicals")]
    UnresolvedStep,

    #[error("Please select a chemical")]
    MissingChemical,

    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error("Please select a unit")]
    MissingUnit,

    #[error("Unknown unit '{0}'")]
    InvalidUnit(String),

    #[error("Percentage must be greater than 0 and not more than 100")]
    InvalidPercentage,

    #[error("Total percentage would be {total}%, which exceeds 100%")]
    TotalExceeded { total: f64 },

    #[error("'{0}' is already in the composition")]
    DuplicateComposition(String),

    #[error("Composition item not found")]
    CompositionNotFound,

    #[error("The form was closed before the edit was applied")]
    EditorClosed,
}

use crate::shared::reference::ReferenceOption;
use serde::{Deserialize, Serialize};

/// Определение шага стирки (справочник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaundryStep {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<&LaundryStep> for ReferenceOption {
    fn from(s: &LaundryStep) -> Self {
        ReferenceOption::new(s.id.clone(), s.name.clone())
    }
}

/// Payload of `POST /api/step-items`.
///
/// Attachments stay local in the recipe editor; this type only documents
/// the endpoint's known fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepItemDto {
    pub step_id: String,
    pub chemical_item_id: String,
    pub quantity: f64,
    pub unit: String,
}

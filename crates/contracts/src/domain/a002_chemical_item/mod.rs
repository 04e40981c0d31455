use crate::shared::reference::ReferenceOption;
use serde::{Deserialize, Serialize};

/// Химикат (справочник для рецептов стирки)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<&ChemicalItem> for ReferenceOption {
    fn from(c: &ChemicalItem) -> Self {
        ReferenceOption::new(c.id.clone(), c.name.clone())
    }
}

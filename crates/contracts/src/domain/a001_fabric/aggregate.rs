use crate::shared::editor::percentage;
use crate::shared::reference::ReferenceOption;
use serde::{Deserialize, Serialize};

/// Элемент состава ткани (хлопок, полиэстер, эластан...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricComposition {
    pub composition_item_id: String,
    /// Denormalized display label of the composition item
    #[serde(default)]
    pub name: String,
    pub percentage: f64,
}

/// Ткань (справочник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fabric {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    /// Плотность, г/м²
    #[serde(default)]
    pub gsm: Option<f64>,
    /// Ширина, см
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub compositions: Vec<FabricComposition>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Fabric {
    /// "60% Cotton, 40% Polyester"
    pub fn composition_label(&self) -> String {
        self.compositions
            .iter()
            .map(|c| format!("{}% {}", c.percentage, c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Create / update payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricDto {
    pub name: String,
    pub code: String,
    pub supplier_id: Option<String>,
    pub gsm: Option<f64>,
    pub width: Option<f64>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub compositions: Vec<FabricComposition>,
}

impl FabricDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Fabric name is required".into());
        }
        if self.supplier_id.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err("Supplier is required".into());
        }
        if self.gsm.is_some_and(|v| v < 0.0) || self.width.is_some_and(|v| v < 0.0) {
            return Err("GSM and width cannot be negative".into());
        }
        if !percentage::is_save_ready(self.compositions.iter().map(|c| c.percentage)) {
            return Err("Composition must add up to exactly 100%".into());
        }
        Ok(())
    }
}

impl From<&Fabric> for FabricDto {
    fn from(f: &Fabric) -> Self {
        Self {
            name: f.name.clone(),
            code: f.code.clone(),
            supplier_id: f.supplier_id.clone(),
            gsm: f.gsm,
            width: f.width,
            color: f.color.clone(),
            description: f.description.clone(),
            compositions: f.compositions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<&Supplier> for ReferenceOption {
    fn from(s: &Supplier) -> Self {
        ReferenceOption::new(s.id.clone(), s.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<&CompositionItem> for ReferenceOption {
    fn from(c: &CompositionItem) -> Self {
        ReferenceOption::new(c.id.clone(), c.name.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query string of `GET /api/fabrics`. `page` is 1-based on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricListQuery {
    pub page: usize,
    pub limit: usize,
    pub sort_field: String,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub search: String,
}

impl Default for FabricListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort_field: "name".to_string(),
            sort_order: SortOrder::Asc,
            search: String::new(),
        }
    }
}

impl FabricListQuery {
    /// Clicking the active column flips the order, another column starts ascending.
    /// Either way the list goes back to the first page.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricListResponse {
    pub data: Vec<Fabric>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(compositions: Vec<(&str, f64)>) -> FabricDto {
        FabricDto {
            name: "Denim 12oz".into(),
            code: "DN-12".into(),
            supplier_id: Some("sup1".into()),
            gsm: Some(400.0),
            width: Some(150.0),
            color: Some("Indigo".into()),
            description: None,
            compositions: compositions
                .into_iter()
                .map(|(id, p)| FabricComposition {
                    composition_item_id: id.into(),
                    name: id.into(),
                    percentage: p,
                })
                .collect(),
        }
    }

    #[test]
    fn test_validate_requires_full_composition() {
        assert!(dto(vec![("cotton", 98.0), ("elastane", 2.0)]).validate().is_ok());
        assert!(dto(vec![("cotton", 98.0)]).validate().is_err());
        assert!(dto(vec![]).validate().is_err());
    }

    #[test]
    fn test_validate_required_fields() {
        let mut d = dto(vec![("cotton", 100.0)]);
        d.name = "  ".into();
        assert_eq!(d.validate(), Err("Fabric name is required".to_string()));

        let mut d = dto(vec![("cotton", 100.0)]);
        d.supplier_id = None;
        assert_eq!(d.validate(), Err("Supplier is required".to_string()));
    }

    #[test]
    fn test_fabric_deserializes_server_shape() {
        let json = r#"{
            "_id": "f1",
            "name": "Twill",
            "supplierId": "s1",
            "compositions": [{"compositionItemId": "c1", "name": "Cotton", "percentage": 100}]
        }"#;
        let fabric: Fabric = serde_json::from_str(json).unwrap();
        assert_eq!(fabric.id, "f1");
        assert_eq!(fabric.code, "");
        assert_eq!(fabric.composition_label(), "100% Cotton");
    }

    #[test]
    fn test_list_response_shape() {
        let json = r#"{"data": [], "pagination": {"totalPages": 4}}"#;
        let resp: FabricListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.pagination.total_pages, 4);
    }

    #[test]
    fn test_toggle_sort() {
        let mut q = FabricListQuery {
            page: 3,
            ..Default::default()
        };
        q.toggle_sort("name");
        assert_eq!(q.sort_order, SortOrder::Desc);
        assert_eq!(q.page, 1);
        q.toggle_sort("code");
        assert_eq!(q.sort_field, "code");
        assert_eq!(q.sort_order, SortOrder::Asc);
    }
}

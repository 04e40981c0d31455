use crate::shared::editor::{EditorEntry, EntryField, EntryKind, FieldChange, InstanceId};
use serde::{Deserialize, Serialize};

/// Единица измерения химиката (фиксированный набор)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "l")]
    Liters,
    #[serde(rename = "g/l")]
    GramsPerLiter,
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Kilograms => "kg",
            Unit::Milliliters => "ml",
            Unit::Liters => "l",
            Unit::GramsPerLiter => "g/l",
            Unit::Percent => "%",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|u| u.as_str() == code)
    }

    pub fn all() -> [Unit; 6] {
        [
            Unit::Grams,
            Unit::Kilograms,
            Unit::Milliliters,
            Unit::Liters,
            Unit::GramsPerLiter,
            Unit::Percent,
        ]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Химикат, добавленный к шагу рецепта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalUsage {
    pub instance_id: InstanceId,
    pub chemical_item_id: String,
    pub quantity: f64,
    pub unit: Unit,
    /// Denormalized display label
    pub name: String,
    pub owner_step_id: String,
    pub owner_instance_id: InstanceId,
}

/// Шаг рецепта стирки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub instance_id: InstanceId,
    pub step_id: Option<String>,
    pub step_name: String,
    pub sequence: u32,
    /// Minutes
    pub time: f64,
    pub temp: f64,
    pub liters: f64,
    pub chemicals: Vec<ChemicalUsage>,
}

impl Step {
    /// Compound identity used by the attachment flow
    pub fn matches(&self, step_id: &str, instance_id: InstanceId) -> bool {
        self.instance_id == instance_id && self.step_id.as_deref() == Some(step_id)
    }
}

impl EditorEntry for Step {
    const KIND: EntryKind = EntryKind::Step;

    fn placeholder(instance_id: InstanceId, sequence: u32) -> Self {
        Self {
            instance_id,
            step_id: None,
            step_name: String::new(),
            sequence,
            time: 0.0,
            temp: 0.0,
            liters: 0.0,
            chemicals: Vec::new(),
        }
    }

    fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    fn sequence(&self) -> u32 {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: u32) {
        self.sequence = sequence;
    }

    fn reference_id(&self) -> Option<&str> {
        self.step_id.as_deref()
    }

    fn accepts(field: EntryField) -> bool {
        !matches!(field, EntryField::Remark)
    }

    fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Time(v) => self.time = v,
            FieldChange::Temp(v) => self.temp = v,
            FieldChange::Liters(v) => self.liters = v,
            FieldChange::Reference(option) => {
                // attached chemicals follow their step to the new definition
                for chemical in self.chemicals.iter_mut() {
                    chemical.owner_step_id = option.id.clone();
                }
                self.step_id = Some(option.id);
                self.step_name = option.name;
            }
            FieldChange::Remark(_) => {}
        }
    }
}

/// Процесс стирки в рабочей области рецепта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessEntry {
    pub instance_id: InstanceId,
    pub sequence: u32,
    pub laundry_process_id: Option<String>,
    pub process_name: String,
    /// Read-only copy of the referenced process's type
    pub process_type: String,
    pub remark: String,
}

impl EditorEntry for ProcessEntry {
    const KIND: EntryKind = EntryKind::Process;

    fn placeholder(instance_id: InstanceId, sequence: u32) -> Self {
        Self {
            instance_id,
            sequence,
            laundry_process_id: None,
            process_name: String::new(),
            process_type: String::new(),
            remark: String::new(),
        }
    }

    fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    fn sequence(&self) -> u32 {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: u32) {
        self.sequence = sequence;
    }

    fn reference_id(&self) -> Option<&str> {
        self.laundry_process_id.as_deref()
    }

    fn accepts(field: EntryField) -> bool {
        matches!(field, EntryField::Reference | EntryField::Remark)
    }

    fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Reference(option) => {
                self.laundry_process_id = Some(option.id);
                self.process_name = option.name;
                self.process_type = option.tag.unwrap_or_default();
            }
            FieldChange::Remark(remark) => self.remark = remark,
            _ => {}
        }
    }
}

/// Render-ready row of the recipe workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkspaceItem {
    Step(Step),
    Process(ProcessEntry),
}

impl WorkspaceItem {
    pub fn kind(&self) -> EntryKind {
        match self {
            WorkspaceItem::Step(_) => EntryKind::Step,
            WorkspaceItem::Process(_) => EntryKind::Process,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        match self {
            WorkspaceItem::Step(s) => s.instance_id,
            WorkspaceItem::Process(p) => p.instance_id,
        }
    }

    pub fn sequence(&self) -> u32 {
        match self {
            WorkspaceItem::Step(s) => s.sequence,
            WorkspaceItem::Process(p) => p.sequence,
        }
    }

    pub fn is(&self, kind: EntryKind, instance_id: InstanceId) -> bool {
        self.kind() == kind && self.instance_id() == instance_id
    }

    /// Key for keyed list rendering
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind(), self.instance_id())
    }
}

impl From<Step> for WorkspaceItem {
    fn from(s: Step) -> Self {
        WorkspaceItem::Step(s)
    }
}

impl From<ProcessEntry> for WorkspaceItem {
    fn from(p: ProcessEntry) -> Self {
        WorkspaceItem::Process(p)
    }
}

/// Serializable snapshot of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WashRecipe {
    pub steps: Vec<Step>,
    pub processes: Vec<ProcessEntry>,
    /// Workspace order as `(kind, instanceId)` pairs
    #[serde(default)]
    pub order: Vec<(EntryKind, InstanceId)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_codes() {
        assert_eq!(Unit::from_code("g/l"), Some(Unit::GramsPerLiter));
        assert_eq!(Unit::from_code("oz"), None);
        assert_eq!(serde_json::to_string(&Unit::Percent).unwrap(), "\"%\"");
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let step = Step::placeholder(InstanceId::new(), 1);
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("instanceId").is_some());
        assert!(json.get("stepId").is_some());
        assert_eq!(json["sequence"], 1);
    }

    #[test]
    fn test_workspace_item_tagged() {
        let item = WorkspaceItem::from(ProcessEntry::placeholder(InstanceId::new(), 2));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "process");
        assert_eq!(item.sequence(), 2);
    }
}

use crate::shared::reference::ReferenceOption;
use serde::{Deserialize, Serialize};

/// Процесс стирки (enzyme wash, stone wash, bleach...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaundryProcess {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub process_type: String,
}

/// The process type travels in `tag` so process entries can copy it on selection.
impl From<&LaundryProcess> for ReferenceOption {
    fn from(p: &LaundryProcess) -> Self {
        ReferenceOption::new(p.id.clone(), p.name.clone()).with_tag(p.process_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_renamed() {
        let p: LaundryProcess =
            serde_json::from_str(r#"{"_id":"p1","name":"Stone wash","type":"dry"}"#).unwrap();
        assert_eq!(p.process_type, "dry");
        let option = ReferenceOption::from(&p);
        assert_eq!(option.tag.as_deref(), Some("dry"));
    }
}

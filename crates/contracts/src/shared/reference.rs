use serde::{Deserialize, Serialize};

/// Элемент справочника для выпадающих списков (шаг, процесс, химикат, состав)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub id: String,
    pub name: String,
    /// Дополнительный признак справочника (например, тип процесса стирки)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ReferenceOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Find an option by id. Empty ids never match.
pub fn find_reference<'a>(options: &'a [ReferenceOption], id: &str) -> Option<&'a ReferenceOption> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    options.iter().find(|o| o.id == id)
}

/// Pairs for `Select` widgets: `(value, label)`
pub fn to_select_options(options: &[ReferenceOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|o| (o.id.clone(), o.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_reference_ignores_blank_ids() {
        let options = vec![ReferenceOption::new("s1", "Desize"), ReferenceOption::new("", "Blank")];
        assert_eq!(find_reference(&options, "s1").map(|o| o.name.as_str()), Some("Desize"));
        assert!(find_reference(&options, "  ").is_none());
        assert!(find_reference(&options, "s9").is_none());
    }
}

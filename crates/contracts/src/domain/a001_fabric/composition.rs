//! Fabric composition editor.
//!
//! Shared by the create and edit forms. The running total is checked on
//! every add and every percentage edit, so it never goes over 100; the form
//! may only be saved once it is exactly 100.

use super::aggregate::FabricComposition;
use crate::shared::editor::percentage::{self, PERCENTAGE_TARGET};
use crate::shared::editor::EditorError;
use crate::shared::reference::ReferenceOption;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionEditor {
    entries: Vec<FabricComposition>,
}

impl CompositionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap compositions loaded from the server as-is
    pub fn from_entries(entries: Vec<FabricComposition>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FabricComposition] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<FabricComposition> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        percentage::percentage_total(self.entries.iter().map(|e| e.percentage))
    }

    pub fn remaining(&self) -> f64 {
        (PERCENTAGE_TARGET - self.total()).max(0.0)
    }

    pub fn is_save_ready(&self) -> bool {
        percentage::is_save_ready(self.entries.iter().map(|e| e.percentage))
    }

    pub fn contains(&self, composition_item_id: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.composition_item_id == composition_item_id)
    }

    /// Add `item` with `percentage`. Rejects invalid values, duplicates and
    /// anything that would push the total past 100.
    pub fn add(&mut self, item: &ReferenceOption, percentage: f64) -> Result<(), EditorError> {
        if item.id.trim().is_empty() {
            return Err(EditorError::CompositionNotFound);
        }
        let percentage = percentage::validate_percentage(percentage)?;
        if self.contains(&item.id) {
            return Err(EditorError::DuplicateComposition(item.name.clone()));
        }
        percentage::check_addition(self.total(), percentage)?;

        self.entries.push(FabricComposition {
            composition_item_id: item.id.clone(),
            name: item.name.clone(),
            percentage,
        });
        Ok(())
    }

    /// Change the percentage of an existing entry. The entry's old value is
    /// excluded from the running total before the overflow check.
    pub fn update_percentage(
        &mut self,
        composition_item_id: &str,
        percentage: f64,
    ) -> Result<(), EditorError> {
        let percentage = percentage::validate_percentage(percentage)?;
        let pos = self
            .entries
            .iter()
            .position(|e| e.composition_item_id == composition_item_id)
            .ok_or(EditorError::CompositionNotFound)?;

        let others = percentage::percentage_total(
            self.entries
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != pos)
                .map(|(_, e)| e.percentage),
        );
        percentage::check_addition(others, percentage)?;

        self.entries[pos].percentage = percentage;
        Ok(())
    }

    pub fn remove(&mut self, composition_item_id: &str) -> Result<FabricComposition, EditorError> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.composition_item_id == composition_item_id)
            .ok_or(EditorError::CompositionNotFound)?;
        Ok(self.entries.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ReferenceOption {
        ReferenceOption::new(id, id.to_uppercase())
    }

    #[test]
    fn test_add_rejects_overflow_and_keeps_state() {
        let mut editor = CompositionEditor::new();
        editor.add(&item("c1"), 60.0).unwrap();
        let before = editor.clone();

        let err = editor.add(&item("c2"), 50.0).unwrap_err();
        assert_eq!(err, EditorError::TotalExceeded { total: 110.0 });
        assert_eq!(editor, before);
        assert_eq!(editor.total(), 60.0);
    }

    #[test]
    fn test_running_total_never_exceeds_100() {
        let mut editor = CompositionEditor::new();
        let attempts = [30.0, 45.0, 40.0, 20.0, 5.0, 10.0, 0.5];
        for (i, p) in attempts.iter().enumerate() {
            let _ = editor.add(&item(&format!("c{}", i)), *p);
            assert!(editor.total() <= 100.0);
        }
        assert_eq!(editor.total(), 100.0);
        assert!(editor.is_save_ready());
    }

    #[test]
    fn test_save_ready_exactly_100() {
        let mut editor = CompositionEditor::new();
        editor.add(&item("c1"), 60.0).unwrap();
        editor.add(&item("c2"), 39.9).unwrap();
        assert!(!editor.is_save_ready());
        assert!(matches!(
            editor.add(&item("c3"), 0.2),
            Err(EditorError::TotalExceeded { total }) if total > 100.0
        ));
        editor.add(&item("c3"), 0.1).unwrap();
        assert!(editor.is_save_ready());
        assert_eq!(editor.remaining(), 0.0);
    }

    #[test]
    fn test_duplicate_and_invalid_values() {
        let mut editor = CompositionEditor::new();
        editor.add(&item("c1"), 10.0).unwrap();
        assert_eq!(
            editor.add(&item("c1"), 10.0),
            Err(EditorError::DuplicateComposition("C1".into()))
        );
        assert_eq!(editor.add(&item("c2"), 0.0), Err(EditorError::InvalidPercentage));
        assert_eq!(editor.add(&item("c2"), -3.0), Err(EditorError::InvalidPercentage));
        assert_eq!(editor.add(&item(""), 5.0), Err(EditorError::CompositionNotFound));
        assert_eq!(editor.entries().len(), 1);
    }

    #[test]
    fn test_update_percentage_excludes_own_value() {
        let mut editor = CompositionEditor::new();
        editor.add(&item("c1"), 60.0).unwrap();
        editor.add(&item("c2"), 40.0).unwrap();

        editor.update_percentage("c1", 50.0).unwrap();
        assert_eq!(editor.total(), 90.0);
        assert_eq!(
            editor.update_percentage("c1", 70.0),
            Err(EditorError::TotalExceeded { total: 110.0 })
        );
        editor.update_percentage("c1", 60.0).unwrap();
        assert!(editor.is_save_ready());
        assert_eq!(
            editor.update_percentage("zz", 1.0),
            Err(EditorError::CompositionNotFound)
        );
    }

    #[test]
    fn test_remove() {
        let mut editor = CompositionEditor::from_entries(vec![FabricComposition {
            composition_item_id: "c1".into(),
            name: "Cotton".into(),
            percentage: 100.0,
        }]);
        assert!(editor.is_save_ready());
        let removed = editor.remove("c1").unwrap();
        assert_eq!(removed.name, "Cotton");
        assert!(editor.is_empty());
        assert_eq!(editor.remove("c1"), Err(EditorError::CompositionNotFound));
    }
}

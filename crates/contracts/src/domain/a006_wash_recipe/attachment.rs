//! Chemicals attached to one step of the recipe workspace.
//!
//! A step is addressed by `(step_id, instance_id)` together: two rows may
//! reference the same step definition, and a row may have been removed
//! while the attachment form was open.

use super::aggregate::{ChemicalUsage, Step, Unit, WorkspaceItem};
use super::workspace::WashRecipeWorkspace;
use crate::shared::editor::{EditorError, InstanceId};
use crate::shared::reference::{find_reference, ReferenceOption};

/// Step the attachment form was opened for
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentTarget {
    pub step_id: String,
    pub step_instance_id: InstanceId,
    pub step_name: String,
}

/// Raw values of the "add chemical" form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChemicalDraft {
    pub chemical_item_id: String,
    pub quantity: String,
    pub unit: String,
}

/// Draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewChemical {
    pub chemical_item_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl ChemicalDraft {
    /// Checked in form order: chemical, quantity, unit.
    pub fn validate(&self, chemicals: &[ReferenceOption]) -> Result<NewChemical, EditorError> {
        if self.chemical_item_id.trim().is_empty() {
            return Err(EditorError::MissingChemical);
        }
        let chemical = find_reference(chemicals, &self.chemical_item_id)
            .ok_or_else(|| EditorError::UnknownReference(self.chemical_item_id.clone()))?;

        let quantity = match self.quantity.trim().parse::<f64>() {
            Ok(q) if q.is_finite() && q > 0.0 => q,
            _ => return Err(EditorError::InvalidQuantity),
        };

        let code = self.unit.trim();
        if code.is_empty() {
            return Err(EditorError::MissingUnit);
        }
        let unit = Unit::from_code(code).ok_or_else(|| EditorError::InvalidUnit(code.to_string()))?;

        Ok(NewChemical {
            chemical_item_id: chemical.id.clone(),
            name: chemical.name.clone(),
            quantity,
            unit,
        })
    }
}

impl WashRecipeWorkspace {
    /// The step must still be in the live collection and have a step definition selected.
    pub fn open_attachment_editor(
        &self,
        step_instance_id: InstanceId,
    ) -> Result<AttachmentTarget, EditorError> {
        let step = self
            .steps
            .find(step_instance_id)
            .ok_or(EditorError::StepNotFound)?;
        let step_id = step
            .step_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(EditorError::UnresolvedStep)?;

        Ok(AttachmentTarget {
            step_id: step_id.to_string(),
            step_instance_id,
            step_name: step.step_name.clone(),
        })
    }

    /// Append `chemical` to the step matching `(step_id, step_instance_id)`.
    ///
    /// The step is rebuilt with a new chemical list rather than mutated in
    /// place; the projection row with the same compound identity is replaced.
    pub fn commit_attachment(
        &mut self,
        step_id: &str,
        chemical: NewChemical,
        step_instance_id: InstanceId,
    ) -> Result<ChemicalUsage, EditorError> {
        let step = self
            .steps
            .entries()
            .iter()
            .find(|s| s.matches(step_id, step_instance_id))
            .ok_or(EditorError::StepNotFound)?;

        let usage = ChemicalUsage {
            instance_id: InstanceId::new(),
            chemical_item_id: chemical.chemical_item_id,
            quantity: chemical.quantity,
            unit: chemical.unit,
            name: chemical.name,
            owner_step_id: step_id.to_string(),
            owner_instance_id: step_instance_id,
        };

        let mut chemicals = step.chemicals.clone();
        chemicals.push(usage.clone());
        let updated = Step {
            chemicals,
            ..step.clone()
        };

        self.steps.replace(updated.clone());
        self.mirror_step(step_id, updated);
        Ok(usage)
    }

    /// Remove one chemical from a step. Returns `false` when it was already gone.
    pub fn detach_chemical(
        &mut self,
        step_instance_id: InstanceId,
        chemical_instance_id: InstanceId,
    ) -> Result<bool, EditorError> {
        let step = self
            .steps
            .find(step_instance_id)
            .ok_or(EditorError::StepNotFound)?;
        if !step
            .chemicals
            .iter()
            .any(|c| c.instance_id == chemical_instance_id)
        {
            return Ok(false);
        }

        let updated = Step {
            chemicals: step
                .chemicals
                .iter()
                .filter(|c| c.instance_id != chemical_instance_id)
                .cloned()
                .collect(),
            ..step.clone()
        };
        self.steps.replace(updated.clone());
        self.mirror(WorkspaceItem::Step(updated));
        Ok(true)
    }

    fn mirror_step(&mut self, step_id: &str, step: Step) {
        let instance_id = step.instance_id;
        let row = self.items.iter_mut().find(|i| match i {
            WorkspaceItem::Step(s) => s.matches(step_id, instance_id),
            WorkspaceItem::Process(_) => false,
        });
        match row {
            Some(row) => *row = WorkspaceItem::Step(step),
            None => self.mirror(WorkspaceItem::Step(step)),
        }
    }

    /// Chemicals of one step, empty when the step is gone
    pub fn chemicals_of(&self, step_instance_id: InstanceId) -> &[ChemicalUsage] {
        self.steps
            .find(step_instance_id)
            .map(|s| s.chemicals.as_slice())
            .unwrap_or(&[])
    }

    pub fn chemical_count(&self) -> usize {
        self.items
            .iter()
            .map(|i| match i {
                WorkspaceItem::Step(s) => s.chemicals.len(),
                WorkspaceItem::Process(_) => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::editor::EntryField;

    fn steps() -> Vec<ReferenceOption> {
        vec![
            ReferenceOption::new("s1", "Desize"),
            ReferenceOption::new("s2", "Enzyme"),
        ]
    }

    fn chemicals() -> Vec<ReferenceOption> {
        vec![
            ReferenceOption::new("ch1", "Amylase"),
            ReferenceOption::new("ch2", "Softener"),
        ]
    }

    fn draft(chemical: &str, quantity: &str, unit: &str) -> ChemicalDraft {
        ChemicalDraft {
            chemical_item_id: chemical.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    fn workspace_with_step(step_id: &str) -> (WashRecipeWorkspace, Step) {
        let mut ws = WashRecipeWorkspace::new();
        ws.add_step().unwrap();
        let step = ws
            .update_step_field(0, EntryField::Reference, step_id, &steps())
            .unwrap();
        (ws, step)
    }

    #[test]
    fn test_draft_errors_are_field_specific() {
        let lookup = chemicals();
        assert_eq!(draft("", "2", "g").validate(&lookup), Err(EditorError::MissingChemical));
        assert_eq!(draft("ch1", "0", "g").validate(&lookup), Err(EditorError::InvalidQuantity));
        assert_eq!(draft("ch1", "-1", "g").validate(&lookup), Err(EditorError::InvalidQuantity));
        assert_eq!(draft("ch1", "x", "g").validate(&lookup), Err(EditorError::InvalidQuantity));
        assert_eq!(draft("ch1", "2", "").validate(&lookup), Err(EditorError::MissingUnit));
        assert_eq!(
            draft("ch1", "2", "oz").validate(&lookup),
            Err(EditorError::InvalidUnit("oz".into()))
        );

        let ok = draft("ch2", "1.5", "g/l").validate(&lookup).unwrap();
        assert_eq!(ok.name, "Softener");
        assert_eq!(ok.unit, Unit::GramsPerLiter);
    }

    #[test]
    fn test_open_editor_requires_live_resolved_step() {
        let mut ws = WashRecipeWorkspace::new();
        let placeholder = ws.add_step().unwrap();
        assert_eq!(
            ws.open_attachment_editor(placeholder.instance_id),
            Err(EditorError::UnresolvedStep)
        );
        assert_eq!(
            ws.open_attachment_editor(InstanceId::new()),
            Err(EditorError::StepNotFound)
        );

        ws.update_step_field(0, EntryField::Reference, "s1", &steps())
            .unwrap();
        let target = ws.open_attachment_editor(placeholder.instance_id).unwrap();
        assert_eq!(target.step_id, "s1");
        assert_eq!(target.step_name, "Desize");

        ws.remove_step(0).unwrap();
        assert_eq!(
            ws.open_attachment_editor(placeholder.instance_id),
            Err(EditorError::StepNotFound)
        );
    }

    #[test]
    fn test_commit_appends_and_mirrors() {
        let (mut ws, step) = workspace_with_step("s1");
        let chem = draft("ch1", "2", "g").validate(&chemicals()).unwrap();

        let usage = ws.commit_attachment("s1", chem, step.instance_id).unwrap();
        assert_eq!(usage.owner_step_id, "s1");
        assert_eq!(usage.owner_instance_id, step.instance_id);
        assert_eq!(ws.chemicals_of(step.instance_id).len(), 1);

        match &ws.items()[0] {
            WorkspaceItem::Step(s) => assert_eq!(s.chemicals, vec![usage]),
            other => panic!("unexpected row {:?}", other),
        }
        assert_eq!(ws.chemical_count(), 1);
    }

    #[test]
    fn test_commit_fails_for_unmatched_identity() {
        let (mut ws, _step) = workspace_with_step("s1");
        let before = ws.clone();
        let chem = draft("ch1", "2", "g").validate(&chemicals()).unwrap();

        // same step definition, different instance
        let err = ws
            .commit_attachment("s1", chem.clone(), InstanceId::new())
            .unwrap_err();
        assert_eq!(err, EditorError::StepNotFound);
        assert_eq!(ws, before);
    }

    #[test]
    fn test_commit_fails_when_step_id_differs() {
        let (mut ws, step) = workspace_with_step("s1");
        let before = ws.clone();
        let chem = draft("ch1", "2", "g").validate(&chemicals()).unwrap();

        assert_eq!(
            ws.commit_attachment("s2", chem, step.instance_id),
            Err(EditorError::StepNotFound)
        );
        assert_eq!(ws, before);
    }

    #[test]
    fn test_attachments_do_not_leak_to_siblings() {
        let (mut ws, first) = workspace_with_step("s1");
        ws.add_step().unwrap();
        let second = ws
            .update_step_field(1, EntryField::Reference, "s1", &steps())
            .unwrap();

        let chem = draft("ch2", "5", "ml").validate(&chemicals()).unwrap();
        ws.commit_attachment("s1", chem, second.instance_id).unwrap();

        assert!(ws.chemicals_of(first.instance_id).is_empty());
        assert_eq!(ws.chemicals_of(second.instance_id).len(), 1);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let (mut ws, step) = workspace_with_step("s1");
        let chem = draft("ch1", "2", "kg").validate(&chemicals()).unwrap();
        let usage = ws.commit_attachment("s1", chem, step.instance_id).unwrap();

        assert_eq!(ws.detach_chemical(step.instance_id, usage.instance_id), Ok(true));
        assert_eq!(ws.detach_chemical(step.instance_id, usage.instance_id), Ok(false));
        assert_eq!(ws.chemical_count(), 0);
        assert_eq!(
            ws.detach_chemical(InstanceId::new(), usage.instance_id),
            Err(EditorError::StepNotFound)
        );
    }

    #[test]
    fn test_changing_step_definition_moves_chemicals_with_it() {
        let (mut ws, step) = workspace_with_step("s1");
        let chem = draft("ch1", "2", "g").validate(&chemicals()).unwrap();
        ws.commit_attachment("s1", chem, step.instance_id).unwrap();

        ws.update_step_field(0, EntryField::Reference, "s2", &steps())
            .unwrap();
        assert_eq!(ws.chemicals_of(step.instance_id)[0].owner_step_id, "s2");
    }
}

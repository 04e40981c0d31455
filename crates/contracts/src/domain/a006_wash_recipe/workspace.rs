//! Wash-recipe workspace: typed step and process collections plus the
//! flattened projection the table renders.
//!
//! Every change to a typed collection is mirrored into the projection by
//! `(kind, instance_id)`; positions in the projection are never used to
//! address an entry.

use super::aggregate::{ProcessEntry, Step, WashRecipe, WorkspaceItem};
use crate::shared::editor::{CollectionEditor, EditorError, EntryField, EntryKind, InstanceId};
use crate::shared::reference::ReferenceOption;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WashRecipeWorkspace {
    pub(super) steps: CollectionEditor<Step>,
    pub(super) processes: CollectionEditor<ProcessEntry>,
    pub(super) items: Vec<WorkspaceItem>,
}

impl WashRecipeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a snapshot. Entries missing from `order` are appended
    /// after the ordered ones, steps first.
    pub fn from_recipe(recipe: WashRecipe) -> Self {
        let steps = CollectionEditor::from_entries(recipe.steps);
        let processes = CollectionEditor::from_entries(recipe.processes);

        let mut items: Vec<WorkspaceItem> = Vec::new();
        for (kind, id) in &recipe.order {
            let item = match kind {
                EntryKind::Step => steps.find(*id).cloned().map(WorkspaceItem::Step),
                EntryKind::Process => processes.find(*id).cloned().map(WorkspaceItem::Process),
            };
            if let Some(item) = item {
                if !items.iter().any(|i| i.is(item.kind(), item.instance_id())) {
                    items.push(item);
                }
            }
        }
        for step in steps.entries() {
            if !items.iter().any(|i| i.is(EntryKind::Step, step.instance_id)) {
                items.push(WorkspaceItem::Step(step.clone()));
            }
        }
        for process in processes.entries() {
            if !items.iter().any(|i| i.is(EntryKind::Process, process.instance_id)) {
                items.push(WorkspaceItem::Process(process.clone()));
            }
        }

        Self {
            steps,
            processes,
            items,
        }
    }

    pub fn to_recipe(&self) -> WashRecipe {
        WashRecipe {
            steps: self.steps.entries().to_vec(),
            processes: self.processes.entries().to_vec(),
            order: self
                .items
                .iter()
                .map(|i| (i.kind(), i.instance_id()))
                .collect(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        self.steps.entries()
    }

    pub fn processes(&self) -> &[ProcessEntry] {
        self.processes.entries()
    }

    /// Flattened projection in insertion order
    pub fn items(&self) -> &[WorkspaceItem] {
        &self.items
    }

    pub fn find_step(&self, instance_id: InstanceId) -> Option<&Step> {
        self.steps.find(instance_id)
    }

    /// At least one entry and every entry has its reference resolved
    pub fn is_save_ready(&self) -> bool {
        !self.items.is_empty() && self.steps.is_complete() && self.processes.is_complete()
    }

    // === Steps ===

    pub fn add_step(&mut self) -> Result<Step, EditorError> {
        let step = self.steps.add_entry()?;
        self.project_new(WorkspaceItem::Step(step.clone()));
        Ok(step)
    }

    pub fn update_step_field(
        &mut self,
        index: usize,
        field: EntryField,
        raw: &str,
        lookup: &[ReferenceOption],
    ) -> Result<Step, EditorError> {
        let step = self.steps.update_field(index, field, raw, lookup)?;
        self.mirror(WorkspaceItem::Step(step.clone()));
        Ok(step)
    }

    pub fn remove_step(&mut self, index: usize) -> Result<Step, EditorError> {
        let removed = self.steps.remove_entry(index)?;
        self.items
            .retain(|i| !i.is(EntryKind::Step, removed.instance_id));
        self.realign(EntryKind::Step);
        Ok(removed)
    }

    // === Process entries ===

    pub fn add_process(&mut self) -> Result<ProcessEntry, EditorError> {
        let process = self.processes.add_entry()?;
        self.project_new(WorkspaceItem::Process(process.clone()));
        Ok(process)
    }

    pub fn update_process_field(
        &mut self,
        index: usize,
        field: EntryField,
        raw: &str,
        lookup: &[ReferenceOption],
    ) -> Result<ProcessEntry, EditorError> {
        let process = self.processes.update_field(index, field, raw, lookup)?;
        self.mirror(WorkspaceItem::Process(process.clone()));
        Ok(process)
    }

    pub fn remove_process(&mut self, index: usize) -> Result<ProcessEntry, EditorError> {
        let removed = self.processes.remove_entry(index)?;
        self.items
            .retain(|i| !i.is(EntryKind::Process, removed.instance_id));
        self.realign(EntryKind::Process);
        Ok(removed)
    }

    // === Identity-addressed edits ===

    /// Position of an entry in its typed collection
    pub fn position_of(&self, kind: EntryKind, instance_id: InstanceId) -> Option<usize> {
        match kind {
            EntryKind::Step => self.steps.position_of(instance_id),
            EntryKind::Process => self.processes.position_of(instance_id),
        }
    }

    /// Edit the entry with this identity, wherever it currently sits.
    pub fn update_entry(
        &mut self,
        kind: EntryKind,
        instance_id: InstanceId,
        field: EntryField,
        raw: &str,
        lookup: &[ReferenceOption],
    ) -> Result<WorkspaceItem, EditorError> {
        let index = self
            .position_of(kind, instance_id)
            .ok_or(EditorError::EntryNotFound { kind })?;
        match kind {
            EntryKind::Step => self
                .update_step_field(index, field, raw, lookup)
                .map(WorkspaceItem::Step),
            EntryKind::Process => self
                .update_process_field(index, field, raw, lookup)
                .map(WorkspaceItem::Process),
        }
    }

    pub fn remove_entry(
        &mut self,
        kind: EntryKind,
        instance_id: InstanceId,
    ) -> Result<WorkspaceItem, EditorError> {
        let index = self
            .position_of(kind, instance_id)
            .ok_or(EditorError::EntryNotFound { kind })?;
        match kind {
            EntryKind::Step => self.remove_step(index).map(WorkspaceItem::Step),
            EntryKind::Process => self.remove_process(index).map(WorkspaceItem::Process),
        }
    }

    // === Projection bookkeeping ===

    /// Append a new entry, evicting any stale same-kind row that still holds its sequence slot.
    fn project_new(&mut self, item: WorkspaceItem) {
        let (kind, sequence) = (item.kind(), item.sequence());
        self.items
            .retain(|i| !(i.kind() == kind && i.sequence() == sequence));
        self.items.push(item);
    }

    /// Replace the projection row with the same identity, or append if absent.
    pub(super) fn mirror(&mut self, item: WorkspaceItem) {
        match self
            .items
            .iter()
            .position(|i| i.is(item.kind(), item.instance_id()))
        {
            Some(pos) => self.items[pos] = item,
            None => self.items.push(item),
        }
    }

    /// Copy the freshly resequenced typed entries into their projection rows.
    fn realign(&mut self, kind: EntryKind) {
        let fresh: Vec<WorkspaceItem> = match kind {
            EntryKind::Step => self
                .steps
                .entries()
                .iter()
                .cloned()
                .map(WorkspaceItem::Step)
                .collect(),
            EntryKind::Process => self
                .processes
                .entries()
                .iter()
                .cloned()
                .map(WorkspaceItem::Process)
                .collect(),
        };
        for item in fresh {
            if let Some(row) = self
                .items
                .iter_mut()
                .find(|i| i.is(item.kind(), item.instance_id()))
            {
                *row = item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::editor::EditorEntry;

    fn step_lookup() -> Vec<ReferenceOption> {
        vec![
            ReferenceOption::new("s1", "Desize"),
            ReferenceOption::new("s2", "Enzyme"),
            ReferenceOption::new("s3", "Rinse"),
        ]
    }

    fn process_lookup() -> Vec<ReferenceOption> {
        vec![ReferenceOption::new("p1", "Stone wash").with_tag("wet")]
    }

    fn add_resolved_step(ws: &mut WashRecipeWorkspace, step_id: &str) -> Step {
        ws.add_step().unwrap();
        let index = ws.steps().len() - 1;
        ws.update_step_field(index, EntryField::Reference, step_id, &step_lookup())
            .unwrap()
    }

    fn step_sequences_in_projection(ws: &WashRecipeWorkspace) -> Vec<u32> {
        ws.items()
            .iter()
            .filter(|i| i.kind() == EntryKind::Step)
            .map(|i| i.sequence())
            .collect()
    }

    #[test]
    fn test_remove_only_step_clears_projection() {
        let mut ws = WashRecipeWorkspace::new();
        add_resolved_step(&mut ws, "s1");
        assert_eq!(ws.steps()[0].sequence, 1);

        ws.remove_step(0).unwrap();
        assert!(ws.steps().is_empty());
        assert!(!ws
            .items()
            .iter()
            .any(|i| i.kind() == EntryKind::Step && i.sequence() == 1));
    }

    #[test]
    fn test_second_step_rejected_until_first_selected() {
        let mut ws = WashRecipeWorkspace::new();
        ws.add_step().unwrap();
        assert!(matches!(
            ws.add_step(),
            Err(EditorError::IncompletePriorEntry { .. })
        ));
        assert_eq!(ws.items().len(), 1);

        ws.update_step_field(0, EntryField::Reference, "s1", &step_lookup())
            .unwrap();
        ws.add_step().unwrap();
        assert_eq!(ws.steps().len(), 2);
    }

    #[test]
    fn test_remove_realigns_projection_by_identity() {
        let mut ws = WashRecipeWorkspace::new();
        let a = add_resolved_step(&mut ws, "s1");
        ws.add_process().unwrap();
        let b = add_resolved_step(&mut ws, "s2");
        let c = add_resolved_step(&mut ws, "s3");

        ws.remove_step(0).unwrap();

        assert_eq!(step_sequences_in_projection(&ws), vec![1, 2]);
        assert!(!ws.items().iter().any(|i| i.instance_id() == a.instance_id));
        let b_row = ws
            .items()
            .iter()
            .find(|i| i.instance_id() == b.instance_id)
            .unwrap();
        assert_eq!(b_row.sequence(), 1);
        let c_row = ws
            .items()
            .iter()
            .find(|i| i.instance_id() == c.instance_id)
            .unwrap();
        assert_eq!(c_row.sequence(), 2);
        // the process keeps its own numbering
        let process_row = ws
            .items()
            .iter()
            .find(|i| i.kind() == EntryKind::Process)
            .unwrap();
        assert_eq!(process_row.sequence(), 1);
    }

    #[test]
    fn test_steps_and_processes_numbered_independently() {
        let mut ws = WashRecipeWorkspace::new();
        add_resolved_step(&mut ws, "s1");
        ws.add_process().unwrap();
        ws.update_process_field(0, EntryField::Reference, "p1", &process_lookup())
            .unwrap();
        add_resolved_step(&mut ws, "s2");
        ws.add_process().unwrap();

        assert_eq!(ws.steps().iter().map(|s| s.sequence).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            ws.processes().iter().map(|p| p.sequence).collect::<Vec<_>>(),
            vec![1, 2]
        );
        let kinds: Vec<EntryKind> = ws.items().iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Step,
                EntryKind::Process,
                EntryKind::Step,
                EntryKind::Process
            ]
        );

        ws.remove_process(0).unwrap();
        assert_eq!(ws.processes()[0].sequence, 1);
        assert_eq!(ws.items().len(), 3);
    }

    #[test]
    fn test_update_mirrors_into_projection() {
        let mut ws = WashRecipeWorkspace::new();
        let step = add_resolved_step(&mut ws, "s1");
        ws.update_step_field(0, EntryField::Time, "15", &[]).unwrap();
        ws.update_step_field(0, EntryField::Liters, "120", &[]).unwrap();

        match ws.items().iter().find(|i| i.instance_id() == step.instance_id) {
            Some(WorkspaceItem::Step(s)) => {
                assert_eq!(s.time, 15.0);
                assert_eq!(s.liters, 120.0);
                assert_eq!(s.step_name, "Desize");
            }
            other => panic!("unexpected projection row: {:?}", other),
        }
    }

    #[test]
    fn test_process_reference_copies_type() {
        let mut ws = WashRecipeWorkspace::new();
        ws.add_process().unwrap();
        let p = ws
            .update_process_field(0, EntryField::Reference, "p1", &process_lookup())
            .unwrap();
        assert_eq!(p.process_type, "wet");
        assert_eq!(
            ws.update_process_field(0, EntryField::Time, "3", &[]),
            Err(EditorError::UnsupportedField("time"))
        );
    }

    #[test]
    fn test_failed_update_leaves_everything_untouched() {
        let mut ws = WashRecipeWorkspace::new();
        add_resolved_step(&mut ws, "s1");
        let before = ws.clone();
        assert!(ws.update_step_field(0, EntryField::Temp, "-4", &[]).is_err());
        assert!(ws.update_step_field(0, EntryField::Reference, " ", &step_lookup()).is_err());
        assert_eq!(ws, before);
    }

    #[test]
    fn test_add_evicts_stale_projection_slot() {
        let mut ws = WashRecipeWorkspace::new();
        let mut stale = Step::placeholder(InstanceId::new(), 1);
        stale.step_id = Some("s1".into());
        ws.items.push(WorkspaceItem::Step(stale.clone()));

        let fresh = ws.add_step().unwrap();
        assert_eq!(fresh.sequence, 1);
        assert_eq!(ws.items().len(), 1);
        assert_eq!(ws.items()[0].instance_id(), fresh.instance_id);
    }

    #[test]
    fn test_save_readiness() {
        let mut ws = WashRecipeWorkspace::new();
        assert!(!ws.is_save_ready());
        ws.add_step().unwrap();
        assert!(!ws.is_save_ready());
        ws.update_step_field(0, EntryField::Reference, "s2", &step_lookup())
            .unwrap();
        assert!(ws.is_save_ready());
    }

    #[test]
    fn test_identity_addressed_edits() {
        let mut ws = WashRecipeWorkspace::new();
        let first = add_resolved_step(&mut ws, "s1");
        let second = add_resolved_step(&mut ws, "s2");

        ws.remove_entry(EntryKind::Step, first.instance_id).unwrap();
        // the second step moved to index 0 but is still reachable by identity
        let row = ws
            .update_entry(EntryKind::Step, second.instance_id, EntryField::Temp, "60", &[])
            .unwrap();
        assert_eq!(row.sequence(), 1);
        assert_eq!(ws.steps()[0].temp, 60.0);

        assert_eq!(
            ws.update_entry(EntryKind::Step, first.instance_id, EntryField::Temp, "1", &[]),
            Err(EditorError::EntryNotFound { kind: EntryKind::Step })
        );
        assert_eq!(
            ws.remove_entry(EntryKind::Process, second.instance_id),
            Err(EditorError::EntryNotFound { kind: EntryKind::Process })
        );
    }

    #[test]
    fn test_recipe_snapshot_round_trip_keeps_order() {
        let mut ws = WashRecipeWorkspace::new();
        add_resolved_step(&mut ws, "s1");
        ws.add_process().unwrap();
        add_resolved_step(&mut ws, "s2");

        let json = serde_json::to_string(&ws.to_recipe()).unwrap();
        let restored = WashRecipeWorkspace::from_recipe(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.items(), ws.items());
    }
}

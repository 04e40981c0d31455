use crate::domain::a002_chemical_item::api::fetch_chemical_items;
use crate::domain::a003_laundry_process::api::fetch_laundry_processes;
use crate::domain::a004_laundry_step::api::fetch_laundry_steps;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use contracts::domain::a006_wash_recipe::{AttachmentTarget, ChemicalDraft, WashRecipeWorkspace};
use contracts::shared::editor::{EditorError, EntryField, EntryKind, InstanceId};
use contracts::shared::reference::ReferenceOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pretty JSON of the recipe snapshot, or the reason it cannot be copied yet
pub fn recipe_json(workspace: &WashRecipeWorkspace) -> Result<String, String> {
    if !workspace.is_save_ready() {
        return Err("Add at least one entry and select a step or process for every row".into());
    }
    serde_json::to_string_pretty(&workspace.to_recipe()).map_err(|e| e.to_string())
}

#[derive(Clone, Copy)]
pub struct WashRecipeViewModel {
    pub workspace: RwSignal<WashRecipeWorkspace>,
    pub step_options: RwSignal<Vec<ReferenceOption>>,
    pub process_options: RwSignal<Vec<ReferenceOption>>,
    pub chemical_options: RwSignal<Vec<ReferenceOption>>,
    /// Rejected edits, shown until the next successful one
    pub notice: RwSignal<Option<String>>,
    /// Failed reference loads
    pub error: RwSignal<Option<String>>,
    /// Step the attachment modal is open for
    pub attachment: RwSignal<Option<AttachmentTarget>>,
    pub copied: RwSignal<bool>,
}

impl WashRecipeViewModel {
    pub fn new() -> Self {
        Self {
            workspace: RwSignal::new(WashRecipeWorkspace::new()),
            step_options: RwSignal::new(Vec::new()),
            process_options: RwSignal::new(Vec::new()),
            chemical_options: RwSignal::new(Vec::new()),
            notice: RwSignal::new(None),
            error: RwSignal::new(None),
            attachment: RwSignal::new(None),
            copied: RwSignal::new(false),
        }
    }

    pub fn load_references(&self) {
        let (steps, processes, chemicals, error) = (
            self.step_options,
            self.process_options,
            self.chemical_options,
            self.error,
        );
        spawn_local(async move {
            match fetch_laundry_steps().await {
                Ok(list) => steps.set(list.iter().map(ReferenceOption::from).collect()),
                Err(e) => {
                    log::error!("Failed to load laundry steps: {}", e);
                    error.set(Some(format!("Failed to load laundry steps: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match fetch_laundry_processes().await {
                Ok(list) => processes.set(list.iter().map(ReferenceOption::from).collect()),
                Err(e) => {
                    log::error!("Failed to load laundry processes: {}", e);
                    error.set(Some(format!("Failed to load laundry processes: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match fetch_chemical_items().await {
                Ok(list) => chemicals.set(list.iter().map(ReferenceOption::from).collect()),
                Err(e) => {
                    log::error!("Failed to load chemical items: {}", e);
                    error.set(Some(format!("Failed to load chemical items: {}", e)));
                }
            }
        });
    }

    /// Run `op` on a copy of the workspace and commit the copy only on success.
    fn apply<T>(
        &self,
        op: impl FnOnce(&mut WashRecipeWorkspace) -> Result<T, EditorError>,
    ) -> Option<T> {
        let mut next = self.workspace.get_untracked();
        match op(&mut next) {
            Ok(value) => {
                self.workspace.set(next);
                self.notice.set(None);
                self.copied.set(false);
                Some(value)
            }
            Err(e) => {
                log::warn!("Recipe edit rejected: {}", e);
                self.notice.set(Some(e.to_string()));
                None
            }
        }
    }

    pub fn add_step(&self) {
        self.apply(|ws| ws.add_step());
    }

    pub fn add_process(&self) {
        self.apply(|ws| ws.add_process());
    }

    fn lookup_for(&self, kind: EntryKind, field: EntryField) -> Vec<ReferenceOption> {
        if field != EntryField::Reference {
            return Vec::new();
        }
        match kind {
            EntryKind::Step => self.step_options.get_untracked(),
            EntryKind::Process => self.process_options.get_untracked(),
        }
    }

    /// Field edit on the row with this identity
    pub fn update_field(&self, kind: EntryKind, instance_id: InstanceId, field: EntryField, raw: &str) {
        let lookup = self.lookup_for(kind, field);
        if self
            .apply(|ws| ws.update_entry(kind, instance_id, field, raw, &lookup))
            .is_none()
        {
            // the input still shows the rejected text; redraw it from state
            self.workspace.notify();
        }
    }

    pub fn remove(&self, kind: EntryKind, instance_id: InstanceId) {
        if self.apply(|ws| ws.remove_entry(kind, instance_id)).is_some() {
            // the modal may have been open for the removed step
            if self
                .attachment
                .with_untracked(|t| t.as_ref().is_some_and(|t| t.step_instance_id == instance_id))
            {
                self.attachment.set(None);
            }
        }
    }

    pub fn open_attachment(&self, step_instance_id: InstanceId) {
        let target = self
            .workspace
            .with_untracked(|ws| ws.open_attachment_editor(step_instance_id));
        match target {
            Ok(target) => {
                self.notice.set(None);
                self.attachment.set(Some(target));
            }
            Err(e) => {
                log::warn!("Cannot open chemical form: {}", e);
                self.notice.set(Some(e.to_string()));
            }
        }
    }

    pub fn close_attachment(&self) {
        self.attachment.set(None);
    }

    /// Validate the draft and attach it to the target step.
    ///
    /// Draft errors are returned to the modal; a step that disappeared
    /// meanwhile closes the modal and surfaces as a page notice.
    pub fn commit_attachment(&self, target: &AttachmentTarget, draft: &ChemicalDraft) -> Result<(), String> {
        let chemical = self
            .chemical_options
            .with_untracked(|options| draft.validate(options))
            .map_err(|e| e.to_string())?;

        let committed = self.apply(|ws| {
            ws.commit_attachment(&target.step_id, chemical, target.step_instance_id)
        });
        self.attachment.set(None);
        if let Some(usage) = committed {
            log::info!(
                "Attached {} {} {} to step '{}'",
                usage.quantity,
                usage.unit,
                usage.name,
                target.step_name
            );
        }
        Ok(())
    }

    pub fn detach(&self, step_instance_id: InstanceId, chemical_instance_id: InstanceId) {
        self.apply(|ws| ws.detach_chemical(step_instance_id, chemical_instance_id));
    }

    pub fn is_save_ready(&self) -> bool {
        self.workspace.with(|ws| ws.is_save_ready())
    }

    pub fn copy_recipe(&self) {
        let json = match self.workspace.with_untracked(recipe_json) {
            Ok(json) => json,
            Err(e) => {
                self.notice.set(Some(e));
                return;
            }
        };
        let copied = self.copied;
        let notice = self.notice;
        let size = json.len();
        copy_to_clipboard_with_callback(&json, move |result| match result {
            Ok(()) => {
                log::info!("Recipe JSON copied ({} bytes)", size);
                copied.set(true);
            }
            Err(e) => {
                log::error!("{}", e);
                notice.set(Some(e));
            }
        });
    }
}

impl Default for WashRecipeViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_json_requires_save_ready_workspace() {
        let mut ws = WashRecipeWorkspace::new();
        assert!(recipe_json(&ws).is_err());

        ws.add_step().unwrap();
        assert!(recipe_json(&ws).is_err());

        let steps = vec![ReferenceOption::new("s1", "Desize")];
        ws.update_step_field(0, EntryField::Reference, "s1", &steps)
            .unwrap();
        let json = recipe_json(&ws).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["steps"][0]["stepName"], "Desize");
        assert_eq!(value["order"][0][0], "step");
    }
}

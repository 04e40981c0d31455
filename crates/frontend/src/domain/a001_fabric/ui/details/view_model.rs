use crate::domain::a001_fabric::api;
use contracts::domain::a001_fabric::{CompositionEditor, FabricDto};
use contracts::shared::editor::percentage::parse_percentage;
use contracts::shared::editor::EditorError;
use contracts::shared::reference::{find_reference, ReferenceOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Blank means "not set"; anything else must be a non-negative number.
pub fn parse_optional_measure(label: &str, raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(format!("{} must be a non-negative number", label)),
    }
}

/// `None` from `try_update` means the editor signal is gone; nothing was applied.
fn edit_outcome<T>(outcome: Option<Result<T, EditorError>>) -> Result<T, EditorError> {
    outcome.unwrap_or(Err(EditorError::EditorClosed))
}

fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// ViewModel for the fabric form
#[derive(Clone, Copy)]
pub struct FabricDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<FabricDto>,
    pub composition: RwSignal<CompositionEditor>,
    pub suppliers: RwSignal<Vec<ReferenceOption>>,
    pub composition_items: RwSignal<Vec<ReferenceOption>>,
    /// Load / save failures
    pub error: RwSignal<Option<String>>,
    /// Rejected composition edits
    pub notice: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FabricDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(FabricDto::default()),
            composition: RwSignal::new(CompositionEditor::new()),
            suppliers: RwSignal::new(Vec::new()),
            composition_items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    /// Name present, composition exactly 100% and no request in flight
    pub fn can_save(&self) -> bool {
        !self.saving.get()
            && !self.form.with(|f| f.name.trim().is_empty())
            && self.composition.with(|c| c.is_save_ready())
    }

    pub fn load_references(&self) {
        let suppliers = self.suppliers;
        let composition_items = self.composition_items;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(list) => suppliers.set(list.iter().map(ReferenceOption::from).collect()),
                Err(e) => {
                    log::error!("Failed to load suppliers: {}", e);
                    error.set(Some(format!("Failed to load suppliers: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match api::fetch_composition_items().await {
                Ok(list) => {
                    composition_items.set(list.iter().map(ReferenceOption::from).collect())
                }
                Err(e) => {
                    log::error!("Failed to load composition items: {}", e);
                    error.set(Some(format!("Failed to load composition items: {}", e)));
                }
            }
        });
    }

    /// Load the fabric when editing; a new form stays empty
    pub fn load_if_needed(&self, id: Option<String>) {
        self.id.set(id.clone());
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let composition = self.composition;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_fabric(&existing_id).await {
                Ok(fabric) => {
                    form.set(FabricDto::from(&fabric));
                    composition.set(CompositionEditor::from_entries(fabric.compositions));
                }
                Err(e) => {
                    log::error!("Failed to load fabric {}: {}", existing_id, e);
                    error.set(Some(format!("Failed to load fabric: {}", e)));
                }
            }
        });
    }

    /// Composition items not yet in the composition, for the "add" select
    pub fn available_items(&self) -> Vec<(String, String)> {
        let used = self.composition.get();
        self.composition_items
            .get()
            .into_iter()
            .filter(|o| !used.contains(&o.id))
            .map(|o| (o.id, o.name))
            .collect()
    }

    fn reject(&self, e: EditorError) {
        log::warn!("Composition edit rejected: {}", e);
        self.notice.set(Some(e.to_string()));
    }

    /// Returns true when the entry was added so the view can reset its inputs
    pub fn add_composition(&self, item_id: &str, raw_percentage: &str) -> bool {
        let Some(item) = self
            .composition_items
            .with_untracked(|items| find_reference(items, item_id).cloned())
        else {
            self.reject(EditorError::CompositionNotFound);
            return false;
        };
        let result = parse_percentage(raw_percentage)
            .and_then(|pct| edit_outcome(self.composition.try_update(|c| c.add(&item, pct))));
        match result {
            Ok(()) => {
                self.notice.set(None);
                true
            }
            Err(e) => {
                self.reject(e);
                false
            }
        }
    }

    pub fn update_percentage(&self, item_id: &str, raw_percentage: &str) {
        let result = parse_percentage(raw_percentage).and_then(|pct| {
            edit_outcome(
                self.composition
                    .try_update(|c| c.update_percentage(item_id, pct)),
            )
        });
        match result {
            Ok(()) => self.notice.set(None),
            Err(e) => {
                self.reject(e);
                // re-render the input with the stored value
                self.composition.notify();
            }
        }
    }

    pub fn remove_composition(&self, item_id: &str) {
        let result = edit_outcome(
            self.composition
                .try_update(|c| c.remove(item_id).map(|_| ())),
        );
        match result {
            Ok(()) => self.notice.set(None),
            Err(e) => self.reject(e),
        }
    }

    pub fn set_measure(&self, label: &str, raw: &str, apply: fn(&mut FabricDto, Option<f64>)) {
        match parse_optional_measure(label, raw) {
            Ok(value) => {
                self.form.update(|f| apply(f, value));
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }

    pub fn set_text(&self, apply: fn(&mut FabricDto, Option<String>), value: String) {
        self.form.update(|f| apply(f, blank_to_none(value)));
    }

    /// Validate, then create or update
    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.compositions = self.composition.with_untracked(|c| c.entries().to_vec());

        if let Err(e) = dto.validate() {
            log::warn!("Fabric form rejected: {}", e);
            self.error.set(Some(e));
            return;
        }

        let id = self.id.get_untracked();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_fabric(id, &dto).await,
                None => api::create_fabric(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Fabric '{}' saved ({})", saved.name, saved.id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save fabric: {}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

impl Default for FabricDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_measure() {
        assert_eq!(parse_optional_measure("GSM", ""), Ok(None));
        assert_eq!(parse_optional_measure("GSM", "180,5"), Ok(Some(180.5)));
        assert_eq!(
            parse_optional_measure("Width", "-2"),
            Err("Width must be a non-negative number".to_string())
        );
    }

    #[test]
    fn test_closed_editor_is_not_success() {
        assert_eq!(edit_outcome::<()>(None), Err(EditorError::EditorClosed));
        assert_eq!(edit_outcome(Some(Ok(()))), Ok(()));
        assert_eq!(
            edit_outcome::<()>(Some(Err(EditorError::CompositionNotFound))),
            Err(EditorError::CompositionNotFound)
        );
    }
}

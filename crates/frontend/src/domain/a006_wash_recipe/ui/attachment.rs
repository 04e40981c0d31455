use super::view_model::WashRecipeViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::theme::AccentColor;
use contracts::domain::a006_wash_recipe::{AttachmentTarget, ChemicalDraft, Unit};
use contracts::shared::reference::to_select_options;
use leptos::prelude::*;
use std::sync::Arc;

fn unit_options() -> Vec<(String, String)> {
    Unit::all()
        .iter()
        .map(|u| (u.as_str().to_string(), u.as_str().to_string()))
        .collect()
}

/// "Add chemical" form for one step
#[component]
pub fn ChemicalAttachmentModal(
    vm: WashRecipeViewModel,
    target: AttachmentTarget,
    accent: AccentColor,
) -> impl IntoView {
    let draft = RwSignal::new(ChemicalDraft::default());
    let error = RwSignal::new(None::<String>);
    let title = format!("Add chemical to {}", target.step_name);
    let target = StoredValue::new(target);

    let submit = move || {
        let result = target.with_value(|t| vm.commit_attachment(t, &draft.get_untracked()));
        if let Err(e) = result {
            error.set(Some(e));
        }
    };

    let action_buttons = move || {
        view! {
            <Button accent=accent.clone() on_click=Callback::new(move |_| submit())>
                {icon("plus")}
                "Add"
            </Button>
            <Button variant="secondary" on_click=Callback::new(move |_| vm.close_attachment())>
                "Cancel"
            </Button>
        }
        .into_any()
    };

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| vm.close_attachment())
            action_buttons=Arc::new(action_buttons)
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <Select
                    label="Chemical"
                    placeholder="Select chemical"
                    value=Signal::derive(move || draft.with(|d| d.chemical_item_id.clone()))
                    options=Signal::derive(move || vm.chemical_options.with(|o| to_select_options(o)))
                    on_change=Callback::new(move |v: String| draft.update(|d| d.chemical_item_id = v))
                />
                <Input
                    label="Quantity"
                    input_type="number"
                    step="any"
                    value=Signal::derive(move || draft.with(|d| d.quantity.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.quantity = v))
                />
                <Select
                    label="Unit"
                    placeholder="Select unit"
                    value=Signal::derive(move || draft.with(|d| d.unit.clone()))
                    options=Signal::derive(unit_options)
                    on_change=Callback::new(move |v: String| draft.update(|d| d.unit = v))
                />
            </div>
        </Modal>
    }
}

use super::view_model::DefectResolutionViewModel;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::theme::AccentColor;
use contracts::domain::a005_defect::{Defect, DefectStatus};
use contracts::domain::a007_order::{
    ORDER_STATUS_ACTIVE, ORDER_STATUS_COMPLETED, ORDER_STATUS_ON_HOLD,
};
use leptos::prelude::*;
use std::sync::Arc;

fn status_options() -> Vec<(String, String)> {
    DefectStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.display_name().to_string()))
        .collect()
}

fn order_status_options() -> Vec<(String, String)> {
    [
        (ORDER_STATUS_ACTIVE, "Active"),
        (ORDER_STATUS_ON_HOLD, "On hold"),
        (ORDER_STATUS_COMPLETED, "Completed"),
    ]
    .iter()
    .map(|(value, label)| (value.to_string(), label.to_string()))
    .collect()
}

#[component]
pub fn DefectResolutionModal(
    defect: Defect,
    accent: AccentColor,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = format!("Resolve defect: {}", defect.category);
    let description = defect.description.clone();
    let order_label = defect
        .order_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| format!("Also update order {}", id));
    let vm = DefectResolutionViewModel::new(defect);

    let action_buttons = move || {
        view! {
            <Button
                accent=accent.clone()
                disabled=Signal::derive(move || vm.saving.get())
                on_click=Callback::new(move |_| vm.save_command(on_saved))
            >
                {icon("save")}
                {move || if vm.saving.get() { "Saving..." } else { "Save" }}
            </Button>
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                "Cancel"
            </Button>
        }
        .into_any()
    };

    let needs_resolution = move || {
        vm.form
            .with(|f| DefectStatus::from_str(&f.status).requires_resolution())
    };

    view! {
        <Modal title=title on_close=on_cancel action_buttons=Arc::new(action_buttons)>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <p class="defect__description">{description}</p>

            <div class="details-form">
                <Select
                    label="Status"
                    value=Signal::derive(move || vm.form.with(|f| f.status.clone()))
                    options=Signal::derive(status_options)
                    on_change=Callback::new(move |v: String| vm.form.update(|f| f.status = v))
                />
                <Textarea
                    label="Resolution"
                    value=Signal::derive(move || vm.form.with(|f| f.resolution.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.resolution = v))
                    placeholder="What was done to fix it"
                    rows=4
                />
                <Show when=needs_resolution>
                    <div class="form__hint">"Required for resolved and closed defects"</div>
                </Show>

                {order_label.map(|label| {
                    view! {
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.with(|f| f.update_order)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    vm.form.update(|f| f.update_order = checked);
                                }
                            />
                            {label}
                        </label>
                        <Show when=move || vm.form.with(|f| f.update_order)>
                            <Select
                                label="Order status"
                                value=Signal::derive(move || vm.form.with(|f| f.order_status.clone()))
                                options=Signal::derive(order_status_options)
                                on_change=Callback::new(move |v: String| vm.form.update(|f| f.order_status = v))
                            />
                            <Input
                                label="Order remark"
                                value=Signal::derive(move || vm.form.with(|f| f.order_remark.clone()))
                                on_input=Callback::new(move |v: String| vm.form.update(|f| f.order_remark = v))
                            />
                        </Show>
                    }
                })}
            </div>
        </Modal>
    }
}

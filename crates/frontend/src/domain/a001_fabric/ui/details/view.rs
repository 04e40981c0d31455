use super::view_model::FabricDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::theme::AccentColor;
use contracts::shared::reference::to_select_options;
use leptos::prelude::*;
use std::sync::Arc;

fn format_measure(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn FabricDetails(
    id: Option<String>,
    accent: AccentColor,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FabricDetailsViewModel::new();
    vm.load_references();
    vm.load_if_needed(id);

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit fabric".to_string()
        } else {
            "New fabric".to_string()
        }
    });

    // "add composition" row
    let new_item_id = RwSignal::new(String::new());
    let new_percentage = RwSignal::new(String::new());

    let add_composition = move || {
        if vm.add_composition(&new_item_id.get_untracked(), &new_percentage.get_untracked()) {
            new_item_id.set(String::new());
            new_percentage.set(String::new());
        }
    };

    let total_label = move || {
        vm.composition.with(|c| {
            format!("Total: {}% (remaining {}%)", c.total(), c.remaining())
        })
    };

    let save_accent = accent.clone();
    let action_buttons = move || {
        let accent = save_accent.clone();
        view! {
            <Button
                accent=accent
                disabled=Signal::derive(move || !vm.can_save())
                on_click=Callback::new(move |_| vm.save_command(on_saved))
            >
                {icon("save")}
                {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
            </Button>
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                "Cancel"
            </Button>
        }
        .into_any()
    };

    view! {
        <Modal title=title on_close=on_cancel class="modal--wide" action_buttons=Arc::new(action_buttons)>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Name"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                    placeholder="Denim 12oz"
                />
                <Input
                    label="Code"
                    value=Signal::derive(move || vm.form.with(|f| f.code.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = v))
                />
                <Select
                    label="Supplier"
                    placeholder="Select supplier"
                    value=Signal::derive(move || vm.form.with(|f| f.supplier_id.clone().unwrap_or_default()))
                    options=Signal::derive(move || vm.suppliers.with(|s| to_select_options(s)))
                    on_change=Callback::new(move |v: String| vm.set_text(|f, val| f.supplier_id = val, v))
                />
                <Input
                    label="GSM, g/m²"
                    input_type="number"
                    step="any"
                    value=Signal::derive(move || vm.form.with(|f| format_measure(f.gsm)))
                    on_change=Callback::new(move |v: String| vm.set_measure("GSM", &v, |f, val| f.gsm = val))
                />
                <Input
                    label="Width, cm"
                    input_type="number"
                    step="any"
                    value=Signal::derive(move || vm.form.with(|f| format_measure(f.width)))
                    on_change=Callback::new(move |v: String| vm.set_measure("Width", &v, |f, val| f.width = val))
                />
                <Input
                    label="Color"
                    value=Signal::derive(move || vm.form.with(|f| f.color.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.set_text(|f, val| f.color = val, v))
                />
                <Textarea
                    label="Description"
                    value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.set_text(|f, val| f.description = val, v))
                />
            </div>

            <div class="composition-editor">
                <div class="composition-editor__header">
                    <h3>"Composition"</h3>
                    <span
                        class="composition-editor__total"
                        class:composition-editor__total--ready=move || vm.composition.with(|c| c.is_save_ready())
                        style=move || {
                            if vm.composition.with(|c| c.is_save_ready()) {
                                format!("color: {};", accent.as_str())
                            } else {
                                String::new()
                            }
                        }
                    >
                        {total_label}
                    </span>
                </div>

                {move || vm.notice.get().map(|n| view! { <div class="alert alert--warning">{n}</div> })}

                <table class="composition-editor__table">
                    <tbody>
                        <For
                            each=move || vm.composition.get().into_entries()
                            key=|entry| (entry.composition_item_id.clone(), entry.percentage.to_bits())
                            children=move |entry| {
                                let id_for_update = entry.composition_item_id.clone();
                                let id_for_remove = entry.composition_item_id.clone();
                                let name = entry.name.clone();
                                let pct = entry.percentage;
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td class="composition-editor__pct">
                                            <Input
                                                input_type="number"
                                                step="any"
                                                value=Signal::derive(move || pct.to_string())
                                                on_change=Callback::new(move |v: String| vm.update_percentage(&id_for_update, &v))
                                            />
                                        </td>
                                        <td>"%"</td>
                                        <td>
                                            <Button
                                                variant="ghost"
                                                size="sm"
                                                title="Remove"
                                                on_click=Callback::new(move |_| vm.remove_composition(&id_for_remove))
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="composition-editor__add">
                    <Select
                        placeholder="Composition item"
                        value=new_item_id
                        options=Signal::derive(move || vm.available_items())
                        on_change=Callback::new(move |v: String| new_item_id.set(v))
                    />
                    <Input
                        input_type="number"
                        step="any"
                        placeholder="%"
                        value=new_percentage
                        on_input=Callback::new(move |v: String| new_percentage.set(v))
                    />
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || vm.composition.with(|c| c.remaining() <= 0.0))
                        on_click=Callback::new(move |_| add_composition())
                    >
                        {icon("plus")}
                        "Add"
                    </Button>
                </div>
            </div>
        </Modal>
    }
}

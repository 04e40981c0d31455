use super::attachment::ChemicalAttachmentModal;
use super::view_model::WashRecipeViewModel;
use crate::shared::components::ui::badge::{Badge as UiBadge, BadgeVariant};
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::theme::AccentColor;
use contracts::domain::a006_wash_recipe::WorkspaceItem;
use contracts::shared::editor::{EntryField, EntryKind, InstanceId};
use contracts::shared::reference::to_select_options;
use leptos::prelude::*;
use thaw::*;

fn format_number(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// One workspace row. The row is looked up by identity on every change, so
/// a keyed `For` can keep the DOM node while its content updates.
#[component]
fn RecipeRow(vm: WashRecipeViewModel, kind: EntryKind, instance_id: InstanceId) -> impl IntoView {
    let row = Memo::new(move |_| {
        vm.workspace.with(|ws| {
            ws.items()
                .iter()
                .find(|i| i.is(kind, instance_id))
                .cloned()
        })
    });

    let edit = move |field: EntryField| {
        Callback::new(move |raw: String| vm.update_field(kind, instance_id, field, &raw))
    };
    let numeric = move |pick: fn(&WorkspaceItem) -> f64| {
        Signal::derive(move || row.get().map(|r| format_number(pick(&r))).unwrap_or_default())
    };

    let reference_value = Signal::derive(move || match row.get() {
        Some(WorkspaceItem::Step(s)) => s.step_id.unwrap_or_default(),
        Some(WorkspaceItem::Process(p)) => p.laundry_process_id.unwrap_or_default(),
        None => String::new(),
    });
    let reference_options = Signal::derive(move || match kind {
        EntryKind::Step => vm.step_options.with(|o| to_select_options(o)),
        EntryKind::Process => vm.process_options.with(|o| to_select_options(o)),
    });

    let step_cells = move || {
        view! {
            <TableCell>
                <Input
                    input_type="number"
                    step="any"
                    value=numeric(|r| if let WorkspaceItem::Step(s) = r { s.time } else { 0.0 })
                    on_change=edit(EntryField::Time)
                />
            </TableCell>
            <TableCell>
                <Input
                    input_type="number"
                    step="any"
                    value=numeric(|r| if let WorkspaceItem::Step(s) = r { s.temp } else { 0.0 })
                    on_change=edit(EntryField::Temp)
                />
            </TableCell>
            <TableCell>
                <Input
                    input_type="number"
                    step="any"
                    value=numeric(|r| if let WorkspaceItem::Step(s) = r { s.liters } else { 0.0 })
                    on_change=edit(EntryField::Liters)
                />
            </TableCell>
            <TableCell>
                <div class="recipe__chemicals">
                    {move || {
                        let chemicals = match row.get() {
                            Some(WorkspaceItem::Step(s)) => s.chemicals,
                            _ => Vec::new(),
                        };
                        chemicals
                            .into_iter()
                            .map(|c| {
                                let chemical_id = c.instance_id;
                                view! {
                                    <span class="recipe__chemical">
                                        {format!("{} {} {}", c.name, c.quantity, c.unit)}
                                        <button
                                            class="recipe__chemical-remove"
                                            title="Remove chemical"
                                            on:click=move |_| vm.detach(instance_id, chemical_id)
                                        >
                                            {icon("x")}
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.open_attachment(instance_id)
                    >
                        {icon("flask")}
                        "Add chemical"
                    </Button>
                </div>
            </TableCell>
        }
        .into_any()
    };

    let process_cells = move || {
        let process_type = move || match row.get() {
            Some(WorkspaceItem::Process(p)) if !p.process_type.is_empty() => p.process_type,
            _ => "—".to_string(),
        };
        let remark = Signal::derive(move || match row.get() {
            Some(WorkspaceItem::Process(p)) => p.remark,
            _ => String::new(),
        });
        view! {
            <TableCell attr:colspan="3">
                <span class="recipe__process-type">{process_type}</span>
            </TableCell>
            <TableCell>
                <Input placeholder="Remark" value=remark on_change=edit(EntryField::Remark) />
            </TableCell>
        }
        .into_any()
    };

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>{move || row.get().map(|r| r.sequence()).unwrap_or_default()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <UiBadge variant=match kind {
                    EntryKind::Step => BadgeVariant::Primary,
                    EntryKind::Process => BadgeVariant::Neutral,
                }>
                    {match kind {
                        EntryKind::Step => "Step",
                        EntryKind::Process => "Process",
                    }}
                </UiBadge>
            </TableCell>
            <TableCell>
                <Select
                    placeholder=match kind {
                        EntryKind::Step => "Select step",
                        EntryKind::Process => "Select process",
                    }
                    value=reference_value
                    options=reference_options
                    on_change=edit(EntryField::Reference)
                />
            </TableCell>
            {match kind {
                EntryKind::Step => step_cells(),
                EntryKind::Process => process_cells(),
            }}
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| vm.remove(kind, instance_id)
                >
                    {icon("trash")}
                </Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn WashRecipePage(accent: AccentColor) -> impl IntoView {
    let vm = WashRecipeViewModel::new();
    vm.load_references();

    let counts = move || {
        vm.workspace.with(|ws| {
            format!(
                "{} steps, {} processes, {} chemicals",
                ws.steps().len(),
                ws.processes().len(),
                ws.chemical_count()
            )
        })
    };

    let ready_style = {
        let accent = accent.clone();
        move || {
            if vm.is_save_ready() {
                format!("color: {}; background: {};", accent.as_str(), accent.with_alpha(0.12))
            } else {
                String::new()
            }
        }
    };

    view! {
        <PageFrame page_id="a006_wash_recipe--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Wash recipe"</h1>
                    <span class="recipe__ready" style=ready_style>
                        {move || if vm.is_save_ready() {
                            view! { {icon("check-circle")} "Ready" }.into_any()
                        } else {
                            view! { {icon("clock")} "Incomplete" }.into_any()
                        }}
                    </span>
                    <span class="page__subtitle">{counts}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_step()>
                        {icon("plus")}
                        "Add step"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_process()>
                        {icon("plus")}
                        "Add process"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.is_save_ready())
                        on_click=move |_| vm.copy_recipe()
                    >
                        {icon("copy")}
                        {move || if vm.copied.get() { "Copied" } else { "Copy recipe JSON" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.notice.get().map(|n| view! { <div class="alert alert--warning">{n}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>"#"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Kind"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Step / process"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Time, min"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Temp, °C"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Liters"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Chemicals / remark"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vm.workspace.with(|ws| {
                                    ws.items()
                                        .iter()
                                        .map(|i| (i.key(), i.kind(), i.instance_id()))
                                        .collect::<Vec<_>>()
                                })
                                key=|(key, _, _)| key.clone()
                                children=move |(_, kind, instance_id)| {
                                    view! { <RecipeRow vm=vm kind=kind instance_id=instance_id /> }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
                <Show when=move || vm.workspace.with(|ws| ws.items().is_empty())>
                    <div class="recipe__empty">"Add a step or a process to start the recipe."</div>
                </Show>
            </div>

            {move || vm.attachment.get().map(|target| {
                view! { <ChemicalAttachmentModal vm=vm target=target accent=accent.clone() /> }
            })}
        </PageFrame>
    }
}

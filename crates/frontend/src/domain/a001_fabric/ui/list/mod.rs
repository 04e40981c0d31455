pub mod state;

use self::state::create_state;
use crate::domain::a001_fabric::api;
use crate::domain::a001_fabric::ui::details::FabricDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::theme::AccentColor;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Which form the modal shows
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(String),
}

fn format_measure(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn FabricList(accent: AccentColor) -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(Editing::Closed);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            let query = state.with_untracked(|s| s.query.clone());

            match api::fetch_fabrics(&query).await {
                Ok(resp) => {
                    state.update(|s| {
                        s.items = resp.data;
                        s.total_pages = resp.pagination.total_pages;
                        s.total_count = resp.pagination.total;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load fabrics: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            log!("Loading fabrics...");
            load_items();
        }
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| s.query.toggle_sort(field));
        load_items();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.query.page = page);
        load_items();
    };

    let change_page_size = move |limit: usize| {
        state.update(|s| {
            s.query.limit = limit;
            s.query.page = 1;
        });
        load_items();
    };

    let search = move |text: String| {
        state.update(|s| {
            s.query.search = text;
            s.query.page = 1;
        });
        load_items();
    };

    let delete_item = move |id: String, name: String| {
        if !confirm(&format!("Delete fabric '{}'?", name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_fabric(&id).await {
                Ok(()) => {
                    log::info!("Fabric {} deleted", id);
                    // stepping back keeps the pager in range when the last row of a page goes
                    state.update(|s| {
                        if s.items.len() == 1 && s.query.page > 1 {
                            s.query.page -= 1;
                        }
                    });
                    load_items();
                }
                Err(e) => {
                    log::error!("Failed to delete fabric {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        editing.set(Editing::Closed);
        load_items();
    });
    let on_cancel = Callback::new(move |_| editing.set(Editing::Closed));

    let sort_field = Signal::derive(move || state.with(|s| s.query.sort_field.clone()));
    let sort_order = Signal::derive(move || state.with(|s| s.query.sort_order));
    let on_sort = Callback::new(toggle_sort);

    view! {
        <PageFrame page_id="a001_fabric--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Fabrics"</h1>
                    <UiBadge>
                        {move || state.with(|s| s.total_count.map(|t| t.to_string()).unwrap_or_default())}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Editing::New)>
                        {icon("plus")}
                        "New fabric"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.query.search.clone()))
                                on_submit=Callback::new(search)
                                placeholder="Name or code"
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.query.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                                page_size=Signal::derive(move || state.with(|s| s.query.limit))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>
                </div>

                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="name"
                                    current_sort_field=sort_field
                                    sort_order=sort_order
                                    on_sort=on_sort
                                    min_width=200.0
                                />
                                <SortableHeaderCell
                                    label="Code"
                                    sort_field="code"
                                    current_sort_field=sort_field
                                    sort_order=sort_order
                                    on_sort=on_sort
                                />
                                <TableHeaderCell resizable=false min_width=160.0>"Supplier"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="GSM"
                                    sort_field="gsm"
                                    current_sort_field=sort_field
                                    sort_order=sort_order
                                    on_sort=on_sort
                                    min_width=80.0
                                />
                                <SortableHeaderCell
                                    label="Width"
                                    sort_field="width"
                                    current_sort_field=sort_field
                                    sort_order=sort_order
                                    on_sort=on_sort
                                    min_width=80.0
                                />
                                <TableHeaderCell resizable=false min_width=220.0>"Composition"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| (item.id.clone(), item.updated_at.clone())
                                children=move |item| {
                                    let id_for_edit = item.id.clone();
                                    let id_for_delete = item.id.clone();
                                    let name_for_delete = item.name.clone();
                                    let composition = item.composition_label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            editing.set(Editing::Existing(id_for_edit.clone()));
                                                        }
                                                    >
                                                        {item.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__mono">{item.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.supplier_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_measure(item.gsm)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_measure(item.width)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{composition}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| delete_item(id_for_delete.clone(), name_for_delete.clone())
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || {
                let id = match editing.get() {
                    Editing::Closed => return None,
                    Editing::New => None,
                    Editing::Existing(id) => Some(id),
                };
                Some(view! {
                    <FabricDetails
                        id=id
                        accent=accent.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                })
            }}
        </PageFrame>
    }
}

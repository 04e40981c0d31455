//! Clickable header cell for server-sorted tables.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.query.sort_field.clone()))
//!     sort_order=Signal::derive(move || state.with(|s| s.query.sort_order))
//!     on_sort=Callback::new(toggle_sort)
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a001_fabric::SortOrder;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Wire name of the column, sent as `sortField`
    sort_field: &'static str,
    #[prop(into)]
    current_sort_field: Signal<String>,
    #[prop(into)]
    sort_order: Signal<SortOrder>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || get_sort_indicator(&current_sort_field.get(), sort_field, sort_order.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

use super::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::theme::AccentColor;
use leptos::prelude::*;

/// Tab strip plus the content of every open tab. Inactive tabs stay
/// mounted and are hidden, so their state survives switching.
#[component]
pub fn Tabs(accent: AccentColor) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=|tab: TabData| view! { <TabComponent tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                    <div class="tabs__empty">"Open a page from the menu on the left."</div>
                </Show>
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store accent=accent.clone() /> }
                    }
                />
            </div>
        </div>
    }
}

pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use crate::shared::theme::AccentColor;
use center::tabs::Tabs;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// |   (Left)  |    (Center)      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}

/// Sidebar plus tabs, with `?active=` kept in sync with the active tab.
#[component]
pub fn MainLayout(accent: AccentColor) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration(tabs::tab_label_for_key);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { <Tabs accent=accent.clone() /> }.into_any()
        />
    }
}

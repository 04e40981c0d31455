use crate::layout::global_context::AppGlobalContext;
use crate::layout::MainLayout;
use crate::shared::config::app_config;
use crate::shared::theme::{AccentColor, ThemeProvider};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // tab store shared by the sidebar, the tab strip and the pages
    provide_context(AppGlobalContext::new());

    let accent = AccentColor::new(&app_config().ui.accent_color);

    view! {
        <ThemeProvider accent=accent.clone()>
            <MainLayout accent=accent />
        </ThemeProvider>
    }
}

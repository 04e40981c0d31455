use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Light/dark switch for the top header
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || ctx.theme.get() == Theme::Dark;

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || format!("Switch to {} theme", ctx.theme.get().toggled().display_name())
        >
            {move || if is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}

use crate::shared::theme::AccentColor;
use leptos::prelude::*;

/// Compact button used inside tables and modals.
///
/// Variants: "primary" (default), "secondary", "ghost", "danger". A primary
/// button takes the accent color when one is passed.
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional)]
    accent: Option<AccentColor>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_name = move || variant.get().unwrap_or_else(|| "primary".to_string());
    let variant_class = move || match variant_name().as_str() {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--sm"
        } else {
            ""
        }
    };
    let accent_style = move || match (&accent, variant_name().as_str()) {
        (Some(color), "primary") => format!(
            "background: {c}; border-color: {c};",
            c = color.as_str()
        ),
        _ => String::new(),
    };

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), size_class())
            style=accent_style
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

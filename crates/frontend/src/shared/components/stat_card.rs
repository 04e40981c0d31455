use crate::shared::icons::icon;
use crate::shared::theme::AccentColor;
use leptos::prelude::*;

/// Non-breaking-space thousands separator: 12345 -> "12 345"
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    accent: AccentColor,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div
                class="stat-card__icon"
                style=format!("color: {}; background: {};", accent.as_str(), accent.with_alpha(0.12))
            >
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234567), "1\u{00a0}234\u{00a0}567");
    }
}

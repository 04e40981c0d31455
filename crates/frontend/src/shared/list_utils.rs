//! Helpers shared by list pages: sort headers, client-side filtering and
//! the search box.

use contracts::domain::a001_fabric::SortOrder;
use leptos::prelude::*;

/// Minimum query length for client-side filtering and highlighting
pub const MIN_FILTER_LEN: usize = 2;

/// Rows that can be filtered on the client
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.chars().count() < MIN_FILTER_LEN {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring test used by `Searchable` impls
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Byte ranges of `filter` inside `text`, case-insensitive.
///
/// Falls back to no ranges when lowercasing changes byte lengths.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter = filter.trim();
    if filter.chars().count() < MIN_FILTER_LEN {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&filter_lower) {
        let start = from + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="highlight">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }
    view! { <>{parts}</> }.into_any()
}

pub fn get_sort_indicator(current_field: &str, field: &str, order: SortOrder) -> &'static str {
    if current_field != field {
        return " ⇅";
    }
    match order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box that submits on Enter or the search button; the clear button
/// submits an empty query.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    on_submit: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (draft, set_draft) = signal(value.get_untracked());

    // external resets (e.g. "clear filters") replace the draft
    Effect::new(move |_| set_draft.set(value.get()));

    let submit = move || on_submit.run(draft.get_untracked().trim().to_string());

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <Show when=move || !draft.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| {
                        set_draft.set(String::new());
                        on_submit.run(String::new());
                    }
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
            <button class="button button--secondary search-input__submit" on:click=move |_| submit()>
                {crate::shared::icons::icon("search")}
                "Find"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    #[test]
    fn test_filter_list_ignores_short_queries() {
        let rows = vec![Row("Broken stitch"), Row("Shade variation")];
        assert_eq!(filter_list(&rows, "s").len(), 2);
        assert_eq!(filter_list(&rows, "SHADE").len(), 1);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Stitch stitch", "stitch"), vec![(0, 6), (7, 13)]);
        assert!(match_ranges("Stitch", "x").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", SortOrder::Desc), " ▼");
        assert_eq!(get_sort_indicator("name", "code", SortOrder::Asc), " ⇅");
    }
}

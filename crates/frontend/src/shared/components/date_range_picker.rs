use chrono::{Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// Range ending today and spanning `days` days back, as "YYYY-MM-DD" strings
pub fn last_days_range(today: NaiveDate, days: i64) -> (String, String) {
    let start = today - Duration::days(days);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// Two date inputs plus quick presets for the last 7, 30 and 90 days.
#[component]
pub fn DateRangePicker(
    /// "YYYY-MM-DD"
    #[prop(into)]
    date_from: Signal<String>,
    /// "YYYY-MM-DD"
    #[prop(into)]
    date_to: Signal<String>,
    /// Called with (from, to)
    on_change: Callback<(String, String)>,
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let preset = move |days: i64| {
        on_change.run(last_days_range(Utc::now().date_naive(), days));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}
            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:change=move |ev| {
                        on_change.run((event_target_value(&ev), date_to.get_untracked()));
                    }
                />
                <div>"–"</div>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:change=move |ev| {
                        on_change.run((date_from.get_untracked(), event_target_value(&ev)));
                    }
                />
                <ButtonGroup>
                    {[7_i64, 30, 90]
                        .into_iter()
                        .map(|days| {
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| preset(days)
                                >
                                    {format!("{}d", days)}
                                </Button>
                            }
                        })
                        .collect_view()}
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_days_range() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            last_days_range(today, 7),
            ("2024-02-23".to_string(), "2024-03-01".to_string())
        );
    }
}

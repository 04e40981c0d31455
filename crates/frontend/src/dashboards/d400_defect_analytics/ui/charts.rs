//! Small SVG charts for the analytics dashboard. Bars and lines take their
//! color from the accent passed in by the page.

use crate::shared::components::stat_card::format_count;
use crate::shared::theme::AccentColor;
use contracts::dashboards::d400_defect_analytics::{bar_ratio, max_count, CountEntry, TrendPoint};
use leptos::prelude::*;

const TREND_WIDTH: f64 = 600.0;
const TREND_HEIGHT: f64 = 160.0;
const TREND_PADDING: f64 = 8.0;

/// `points` attribute of the trend polyline, scaled into the view box.
/// A single point is drawn in the middle.
pub fn trend_polyline(points: &[TrendPoint], width: f64, height: f64, padding: f64) -> String {
    let max = max_count(points.iter().map(|p| &p.count));
    let inner_w = width - padding * 2.0;
    let inner_h = height - padding * 2.0;
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() == 1 {
                width / 2.0
            } else {
                padding + step * i as f64
            };
            let y = padding + inner_h * (1.0 - bar_ratio(p.count, max));
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal bars, one per entry
#[component]
pub fn BarChart(
    title: &'static str,
    #[prop(into)]
    entries: Signal<Vec<CountEntry>>,
    accent: AccentColor,
) -> impl IntoView {
    let rows = move || {
        let entries = entries.get();
        if entries.is_empty() {
            return view! { <div class="chart__empty">"No data"</div> }.into_any();
        }
        let max = max_count(entries.iter().map(|e| &e.count));
        let fill = accent.as_str().to_string();
        entries
            .into_iter()
            .map(|entry| {
                let width = format!("{:.1}%", bar_ratio(entry.count, max) * 100.0);
                view! {
                    <div class="chart__bar-row">
                        <span class="chart__bar-label" title=entry.name.clone()>{entry.name.clone()}</span>
                        <svg class="chart__bar" viewBox="0 0 100 10" preserveAspectRatio="none">
                            <rect x="0" y="0" height="10" width=width.clone() fill=fill.clone() rx="1" />
                        </svg>
                        <span class="chart__bar-value">{format_count(entry.count)}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <div class="chart__bars">{rows}</div>
        </div>
    }
}

/// Defects per day as a line with a shaded area
#[component]
pub fn TrendChart(
    #[prop(into)]
    points: Signal<Vec<TrendPoint>>,
    accent: AccentColor,
) -> impl IntoView {
    let stroke = accent.as_str().to_string();
    let area = accent.with_alpha(0.15);

    let body = move || {
        let points = points.get();
        if points.is_empty() {
            return view! { <div class="chart__empty">"No data"</div> }.into_any();
        }
        let line = trend_polyline(&points, TREND_WIDTH, TREND_HEIGHT, TREND_PADDING);
        let bottom = TREND_HEIGHT - TREND_PADDING;
        let (first_x, last_x) = if points.len() == 1 {
            (TREND_WIDTH / 2.0, TREND_WIDTH / 2.0)
        } else {
            (TREND_PADDING, TREND_WIDTH - TREND_PADDING)
        };
        let polygon = format!("{:.1},{:.1} {} {:.1},{:.1}", first_x, bottom, line, last_x, bottom);
        let first_date = points.first().map(|p| p.date.clone()).unwrap_or_default();
        let last_date = points.last().map(|p| p.date.clone()).unwrap_or_default();

        view! {
            <svg
                class="chart__trend"
                viewBox=format!("0 0 {} {}", TREND_WIDTH, TREND_HEIGHT)
                preserveAspectRatio="none"
            >
                <polygon points=polygon fill=area.clone() stroke="none" />
                <polyline points=line fill="none" stroke=stroke.clone() stroke-width="2" />
            </svg>
            <div class="chart__axis">
                <span>{first_date}</span>
                <span>{last_date}</span>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="chart">
            <div class="chart__title">"Trend"</div>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, count: u64) -> TrendPoint {
        TrendPoint {
            date: date.into(),
            count,
        }
    }

    #[test]
    fn test_trend_polyline_scales_to_box() {
        let points = vec![point("2024-05-01", 0), point("2024-05-02", 4), point("2024-05-03", 2)];
        assert_eq!(
            trend_polyline(&points, 100.0, 50.0, 0.0),
            "0.0,50.0 50.0,0.0 100.0,25.0"
        );
    }

    #[test]
    fn test_trend_polyline_single_point_and_zero_counts() {
        assert_eq!(trend_polyline(&[point("2024-05-01", 3)], 100.0, 50.0, 5.0), "50.0,5.0");
        assert_eq!(
            trend_polyline(&[point("a", 0), point("b", 0)], 100.0, 50.0, 0.0),
            "0.0,50.0 100.0,50.0"
        );
        assert_eq!(trend_polyline(&[], 100.0, 50.0, 0.0), "");
    }
}

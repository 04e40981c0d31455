use super::charts::{BarChart, TrendChart};
use crate::dashboards::d400_defect_analytics::api;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Select;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::theme::AccentColor;
use chrono::Utc;
use contracts::dashboards::d400_defect_analytics::{
    share_percent, AnalyticsQuery, AnalyticsSummary, CountEntry, TopCategory,
};
use contracts::domain::a005_defect::{DefectStatus, Severity};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn severity_options() -> Vec<(String, String)> {
    Severity::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.display_name().to_string()))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    DefectStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.display_name().to_string()))
        .collect()
}

fn top_category_options() -> Vec<(String, String)> {
    TopCategory::all()
        .iter()
        .map(|c| (c.as_path().to_string(), c.display_name().to_string()))
        .collect()
}

#[component]
pub fn DefectAnalyticsDashboard(accent: AccentColor) -> impl IntoView {
    let query = RwSignal::new(AnalyticsQuery::last_days(Utc::now().date_naive()));
    let severity = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let summary = RwSignal::new(None::<AnalyticsSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let top_category = RwSignal::new(TopCategory::Category);
    let top_entries = RwSignal::new(Vec::<CountEntry>::new());
    let (top_error, set_top_error) = signal::<Option<String>>(None);
    let top_limit = app_config().ui.top_limit;

    // reload whenever the range or a filter changes
    Effect::new(move |_| {
        let q = query
            .get()
            .with_filters(&severity.get(), &status.get());
        log!("Loading defect analytics {} .. {}", q.start_date, q.end_date);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_analytics(&q).await {
                Ok(data) => summary.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load defect analytics: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        let category = top_category.get();
        set_top_error.set(None);
        spawn_local(async move {
            match api::fetch_top(category, top_limit).await {
                Ok(entries) => top_entries.set(entries),
                Err(e) => {
                    log::error!("Failed to load top {}: {}", category.as_path(), e);
                    set_top_error.set(Some(e));
                }
            }
        });
    });

    let stat = move |pick: fn(&AnalyticsSummary) -> u64| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(pick)))
    };
    let section = move |pick: fn(&AnalyticsSummary) -> Vec<CountEntry>| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(pick).unwrap_or_default()))
    };
    let rate = Signal::derive(move || {
        summary.with(|s| {
            s.as_ref()
                .map(|s| format!("{}% resolved", s.resolution_rate()))
        })
    });
    let top_total = Signal::derive(move || top_entries.with(|e| e.iter().map(|x| x.count).sum::<u64>()));

    view! {
        <PageFrame page_id="d400_defect_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Defect analytics"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| query.notify()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <DateRangePicker
                                date_from=Signal::derive(move || query.with(|q| q.start_date.clone()))
                                date_to=Signal::derive(move || query.with(|q| q.end_date.clone()))
                                on_change=Callback::new(move |(from, to): (String, String)| {
                                    let mut next = query.get_untracked();
                                    next.start_date = from;
                                    next.end_date = to;
                                    if let Err(e) = next.validate() {
                                        log::warn!("Date range rejected: {}", e);
                                        set_error.set(Some(e));
                                        return;
                                    }
                                    query.set(next);
                                })
                            />
                            <Select
                                placeholder="All severities"
                                value=severity
                                options=Signal::derive(severity_options)
                                on_change=Callback::new(move |v: String| severity.set(v))
                            />
                            <Select
                                placeholder="All statuses"
                                value=status
                                options=Signal::derive(status_options)
                                on_change=Callback::new(move |v: String| status.set(v))
                            />
                        </div>
                    </div>
                </div>

                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="dashboard__stats">
                    <StatCard
                        label="Total defects"
                        icon_name="alert-triangle"
                        value=stat(|s| s.total_defects)
                        accent=accent.clone()
                    />
                    <StatCard
                        label="Open"
                        icon_name="clock"
                        value=stat(|s| s.open_defects)
                        accent=accent.clone()
                    />
                    <StatCard
                        label="Resolved"
                        icon_name="check-circle"
                        value=stat(|s| s.resolved_defects)
                        subtitle=rate
                        accent=accent.clone()
                    />
                </div>

                <div class="dashboard__charts">
                    <BarChart title="By category" entries=section(|s| s.by_category.clone()) accent=accent.clone() />
                    <BarChart title="By severity" entries=section(|s| s.by_severity.clone()) accent=accent.clone() />
                    <BarChart title="By status" entries=section(|s| s.by_status.clone()) accent=accent.clone() />
                </div>

                <TrendChart
                    points=Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.trend.clone()).unwrap_or_default()))
                    accent=accent.clone()
                />

                <div class="dashboard__top">
                    <div class="dashboard__top-header">
                        <h2 class="page__subtitle">{format!("Top {}", top_limit)}</h2>
                        <Select
                            value=Signal::derive(move || top_category.get().as_path().to_string())
                            options=Signal::derive(top_category_options)
                            on_change=Callback::new(move |v: String| {
                                if let Some(category) = TopCategory::from_path(&v) {
                                    top_category.set(category);
                                }
                            })
                        />
                    </div>
                    {move || top_error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>"#"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>
                                    {move || top_category.get().display_name()}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Defects"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Share"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let total = top_total.get();
                                top_entries
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, entry)| {
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{i + 1}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{entry.name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{entry.count}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{}%", share_percent(entry.count, total))}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

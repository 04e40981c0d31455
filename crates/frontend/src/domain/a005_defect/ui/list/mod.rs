use crate::domain::a005_defect::api;
use crate::domain::a005_defect::ui::resolution::DefectResolutionModal;
use crate::shared::components::ui::badge::{Badge as UiBadge, BadgeVariant};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::theme::AccentColor;
use contracts::domain::a005_defect::{Defect, DefectStatus, Severity};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for Defect {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.category, filter)
            || contains_ci(&self.description, filter)
            || self
                .order_id
                .as_deref()
                .is_some_and(|o| contains_ci(o, filter))
    }
}

pub fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Critical => BadgeVariant::Error,
        Severity::Major => BadgeVariant::Warning,
        Severity::Minor => BadgeVariant::Primary,
        Severity::Unknown => BadgeVariant::Neutral,
    }
}

pub fn status_variant(status: DefectStatus) -> BadgeVariant {
    match status {
        DefectStatus::Open => BadgeVariant::Error,
        DefectStatus::InProgress => BadgeVariant::Warning,
        DefectStatus::Resolved => BadgeVariant::Success,
        DefectStatus::Closed | DefectStatus::Unknown => BadgeVariant::Neutral,
    }
}

#[component]
pub fn DefectList(accent: AccentColor) -> impl IntoView {
    let items = RwSignal::new(Vec::<Defect>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());
    let resolving = RwSignal::new(None::<Defect>);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_defects().await {
                Ok(list) => items.set(list),
                Err(e) => {
                    log::error!("Failed to load defects: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        log!("Loading defects...");
        load_items();
    });

    let visible = Memo::new(move |_| items.with(|list| filter_list(list, &search.get())));

    let on_saved = Callback::new(move |_| {
        resolving.set(None);
        load_items();
    });
    let on_cancel = Callback::new(move |_| resolving.set(None));

    view! {
        <PageFrame page_id="a005_defect--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Defects"</h1>
                    <UiBadge>
                        {move || format!("{} / {}", visible.with(|v| v.len()), items.with(|i| i.len()))}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
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
                            <SearchInput
                                value=search
                                on_submit=Callback::new(move |text: String| search.set(text))
                                placeholder="Category, description or order"
                            />
                        </div>
                    </div>
                </div>

                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=110.0>"Reported"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Category"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Description"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Severity"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Order"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|d| (d.id.clone(), d.status, d.resolution.clone())
                                children=move |defect| {
                                    let filter = search.get_untracked();
                                    let reported = defect
                                        .reported_at
                                        .as_deref()
                                        .map(|d| d.chars().take(10).collect::<String>())
                                        .unwrap_or_else(|| "—".to_string());
                                    let category = highlight_matches(&defect.category, &filter);
                                    let description = highlight_matches(&defect.description, &filter);
                                    let order = match defect.order_id.as_deref() {
                                        Some(order) => highlight_matches(order, &filter),
                                        None => "—".into_any(),
                                    };
                                    let for_modal = defect.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{reported}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {description}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <UiBadge variant=severity_variant(defect.severity)>
                                                    {defect.severity.display_name()}
                                                </UiBadge>
                                            </TableCell>
                                            <TableCell>
                                                <UiBadge variant=status_variant(defect.status)>
                                                    {defect.status.display_name()}
                                                </UiBadge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__mono">
                                                        {order}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| resolving.set(Some(for_modal.clone()))
                                                >
                                                    {icon("check")}
                                                    "Resolve"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || resolving.get().map(|defect| {
                view! {
                    <DefectResolutionModal
                        defect=defect
                        accent=accent.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect(category: &str, order_id: Option<&str>) -> Defect {
        Defect {
            id: category.to_lowercase(),
            order_id: order_id.map(String::from),
            category: category.into(),
            description: "Found at final inspection".into(),
            severity: Severity::Minor,
            status: DefectStatus::Open,
            resolution: None,
            reported_at: Some("2024-05-02T10:00:00Z".into()),
        }
    }

    #[test]
    fn test_filter_matches_category_description_and_order() {
        let list = vec![defect("Stitching", Some("PO-17")), defect("Shade", None)];
        assert_eq!(filter_list(&list, "stitch").len(), 1);
        assert_eq!(filter_list(&list, "po-1")[0].category, "Stitching");
        assert_eq!(filter_list(&list, "inspection").len(), 2);
        // below the minimum length nothing is filtered
        assert_eq!(filter_list(&list, "x").len(), 2);
    }

    #[test]
    fn test_one_filter_highlights_every_cell() {
        use crate::shared::list_utils::match_ranges;

        let d = Defect {
            description: "Loose stitch near pocket".into(),
            ..defect("Stitching", Some("STITCH-9"))
        };
        let filter = "stitch";
        assert_eq!(match_ranges(&d.category, filter), vec![(0, 6)]);
        assert_eq!(match_ranges(&d.description, filter), vec![(6, 12)]);
        assert_eq!(match_ranges(d.order_id.as_deref().unwrap_or(""), filter), vec![(0, 6)]);
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(severity_variant(Severity::Critical), BadgeVariant::Error);
        assert_eq!(status_variant(DefectStatus::Resolved), BadgeVariant::Success);
        assert_eq!(status_variant(DefectStatus::Unknown), BadgeVariant::Neutral);
    }
}

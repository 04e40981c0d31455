use crate::dashboards::d400_defect_analytics::ui::DefectAnalyticsDashboard;
use crate::domain::a001_fabric::ui::list::FabricList;
use crate::domain::a005_defect::ui::list::DefectList;
use crate::domain::a006_wash_recipe::ui::WashRecipePage;
use crate::shared::theme::AccentColor;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by key.
///
/// The accent is handed to every page that draws accented charts or editors.
pub fn render_tab_content(key: &str, accent: AccentColor) -> AnyView {
    match key {
        "a001_fabric" => view! { <FabricList accent=accent /> }.into_any(),
        "a005_defect" => view! { <DefectList accent=accent /> }.into_any(),
        "a006_wash_recipe" => view! { <WashRecipePage accent=accent /> }.into_any(),
        "d400_defect_analytics" => view! { <DefectAnalyticsDashboard accent=accent /> }.into_any(),
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

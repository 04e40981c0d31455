use crate::shared::config::app_config;
use contracts::domain::a001_fabric::{Fabric, FabricListQuery};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct FabricListState {
    pub query: FabricListQuery,
    pub items: Vec<Fabric>,
    pub total_pages: usize,
    pub total_count: Option<usize>,
    pub is_loaded: bool,
}

impl Default for FabricListState {
    fn default() -> Self {
        Self {
            query: FabricListQuery {
                limit: app_config().ui.page_size,
                ..FabricListQuery::default()
            },
            items: Vec::new(),
            total_pages: 0,
            total_count: None,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<FabricListState> {
    RwSignal::new(FabricListState::default())
}

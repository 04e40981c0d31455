//! Runtime configuration of the dashboard.
//!
//! The embedded defaults are parsed once; an origin saved in localStorage
//! under [`ORIGIN_STORAGE_KEY`] points the client at another API server.

use contracts::shared::config::AppConfig;
use once_cell::sync::OnceCell;
use web_sys::window;

pub const ORIGIN_STORAGE_KEY: &str = "qms-api-origin";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn stored_origin() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ORIGIN_STORAGE_KEY).ok().flatten())
}

fn load() -> AppConfig {
    let origin = stored_origin();
    match AppConfig::load(origin.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to parse embedded config: {}", e);
            AppConfig::default()
        }
    }
}

/// Parse the configuration. Called once from `start()`; later calls are no-ops.
pub fn init() {
    let config = CONFIG.get_or_init(load);
    log::info!(
        "Config loaded: origin='{}', port={}, page_size={}",
        config.api.origin,
        config.api.port,
        config.ui.page_size
    );
}

pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(load)
}

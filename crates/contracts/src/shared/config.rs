use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full origin like "https://qms.example.com". Empty: derive from the page location.
    #[serde(default)]
    pub origin: String,
    /// Port used when the origin is derived from the page location
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_accent")]
    pub accent_color: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_port() -> u16 {
    3000
}

fn default_accent() -> String {
    "#2563eb".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_top_limit() -> usize {
    10
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r##"
[api]
origin = ""
port = 3000

[ui]
accent_color = "#2563eb"
page_size = 20
top_limit = 10
"##;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                origin: String::new(),
                port: default_port(),
            },
            ui: UiConfig {
                accent_color: default_accent(),
                page_size: default_page_size(),
                top_limit: default_top_limit(),
            },
        }
    }
}

impl AppConfig {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Embedded defaults with an optional origin override applied
    pub fn load(origin_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::parse(DEFAULT_CONFIG)?;
        if let Some(origin) = origin_override.map(str::trim).filter(|o| !o.is_empty()) {
            config.api.origin = origin.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    /// Resolve the API base from the page's protocol and hostname when no
    /// explicit origin is configured.
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        if !self.api.origin.is_empty() {
            return self.api.origin.clone();
        }
        format!("{}//{}:{}", protocol, hostname, self.api.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.ui.page_size, 20);
        assert_eq!(config.ui.accent_color, "#2563eb");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = AppConfig::parse("[api]\n[ui]\n").unwrap();
        assert_eq!(config.api.origin, "");
        assert_eq!(config.ui.top_limit, 10);
    }

    #[test]
    fn test_origin_override() {
        let config = AppConfig::load(Some("https://qms.local/")).unwrap();
        assert_eq!(config.api_base("http:", "ignored"), "https://qms.local");

        let config = AppConfig::load(Some("   ")).unwrap();
        assert_eq!(config.api_base("http:", "127.0.0.1"), "http://127.0.0.1:3000");
    }
}

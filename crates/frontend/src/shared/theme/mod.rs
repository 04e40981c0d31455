//! Theme management module for the application.
//!
//! Light/dark theme is persisted in localStorage. The accent color comes
//! from configuration and is handed to charts and editors as a prop.

pub mod theme_select;

pub use theme_select::ThemeSelect;

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "qms-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Set `data-theme` and the accent CSS variable on `<body>`.
fn apply_theme(theme: Theme, accent: &AccentColor) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
    let _ = body.set_attribute("style", &format!("--color-accent: {};", accent.as_str()));
}

/// Accent color of charts, badges and primary actions.
///
/// Always a `#rrggbb` value; anything else in configuration falls back to
/// the default blue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccentColor(String);

pub const DEFAULT_ACCENT: &str = "#2563eb";

impl AccentColor {
    pub fn new(value: &str) -> Self {
        match parse_hex(value) {
            Some((r, g, b)) => Self(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            None => Self(DEFAULT_ACCENT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `rgba(...)` form for translucent fills
    pub fn with_alpha(&self, alpha: f64) -> String {
        let (r, g, b) = parse_hex(&self.0).unwrap_or((37, 99, 235));
        format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(DEFAULT_ACCENT.to_string())
    }
}

/// Accepts `#rgb` and `#rrggbb`
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    pub accent: StoredValue<AccentColor>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme, &self.accent.get_value());
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(accent: AccentColor, children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme, &accent);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        accent: StoredValue::new(accent),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_normalizes_hex() {
        assert_eq!(AccentColor::new("#0F0").as_str(), "#00ff00");
        assert_eq!(AccentColor::new(" #16A34A ").as_str(), "#16a34a");
        assert_eq!(AccentColor::new("teal").as_str(), DEFAULT_ACCENT);
        assert_eq!(AccentColor::new("#12345").as_str(), DEFAULT_ACCENT);
    }

    #[test]
    fn test_accent_with_alpha() {
        assert_eq!(
            AccentColor::new("#ff8000").with_alpha(0.25),
            "rgba(255, 128, 0, 0.25)"
        );
    }

    #[test]
    fn test_theme_round_trip_through_storage_value() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str("forest"), Theme::Light);
    }
}

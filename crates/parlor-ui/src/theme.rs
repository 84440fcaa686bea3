//! Theme system for Parlor applications.
//!
//! Provides 3 themes (Day, Night, Arcade) and the accent classes message
//! components use for titles and borders.

use dioxus::prelude::*;

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Day,
    Night,
    Arcade,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
            Theme::Arcade => "arcade",
        }
    }

    /// Parses a data-theme value, falling back to the default theme.
    pub fn from_css_value(value: &str) -> Self {
        match value {
            "night" => Theme::Night,
            "arcade" => Theme::Arcade,
            _ => Theme::Day,
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
            Theme::Arcade => "Arcade",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Day, Theme::Night, Theme::Arcade]
    }

    /// Text color class for accented headings.
    pub fn accent_color_dark(&self) -> &'static str {
        match self {
            Theme::Day => "accent-color-dark accent-day",
            Theme::Night => "accent-color-dark accent-night",
            Theme::Arcade => "accent-color-dark accent-arcade",
        }
    }

    /// Background class for accent borders.
    pub fn accent_background_light(&self) -> &'static str {
        match self {
            Theme::Day => "accent-background-light accent-day",
            Theme::Night => "accent-background-light accent-night",
            Theme::Arcade => "accent-background-light accent-arcade",
        }
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    *CURRENT_THEME.write() = Theme::from_css_value(&evt.value());
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: *t == current_theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}

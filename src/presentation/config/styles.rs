use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Declarative appearance settings, resolved once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub use_system_color_mode: bool,
    pub initial_color_mode: ColorMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_system_color_mode: false,
            initial_color_mode: ColorMode::Dark,
        }
    }
}

/// Resolved color palette. Built once from [`ThemeConfig`] and never
/// mutated afterwards; every widget reads colors from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub bg: Color,
    pub surface: Color,
    pub primary: Color,
    pub muted: Color,
    pub error: Color,
    pub chart_value: Color,
    pub chart_quantity: Color,
    pub chart_active: Color,
}

impl Theme {
    pub fn new(config: &ThemeConfig) -> Self {
        if config.use_system_color_mode {
            return Self::system();
        }
        match config.initial_color_mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            fg: Color::Rgb(229, 229, 229),
            bg: Color::Rgb(20, 20, 24),
            surface: Color::Rgb(38, 38, 44),
            primary: Color::Rgb(91, 143, 249),
            muted: Color::Rgb(128, 128, 136),
            error: Color::Rgb(224, 108, 117),
            chart_value: Color::Rgb(91, 143, 249),
            chart_quantity: Color::Rgb(90, 216, 166),
            chart_active: Color::Red,
        }
    }

    fn light() -> Self {
        Self {
            fg: Color::Rgb(30, 30, 34),
            bg: Color::Rgb(245, 245, 248),
            surface: Color::Rgb(255, 255, 255),
            primary: Color::Rgb(91, 143, 249),
            muted: Color::Rgb(140, 140, 148),
            error: Color::Rgb(200, 60, 70),
            chart_value: Color::Rgb(91, 143, 249),
            chart_quantity: Color::Rgb(48, 161, 120),
            chart_active: Color::Red,
        }
    }

    // Defer fg/bg to the terminal's own colors, keeping only accents.
    fn system() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            surface: Color::Reset,
            primary: Color::Rgb(91, 143, 249),
            muted: Color::DarkGray,
            error: Color::Red,
            chart_value: Color::Blue,
            chart_quantity: Color::Green,
            chart_active: Color::Red,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_is_dark() {
        let config = ThemeConfig::default();
        assert!(!config.use_system_color_mode);
        assert_eq!(config.initial_color_mode, ColorMode::Dark);
        assert_eq!(Theme::new(&config), Theme::dark());
    }

    #[test]
    fn test_initial_color_mode_selects_palette() {
        let config = ThemeConfig {
            use_system_color_mode: false,
            initial_color_mode: ColorMode::Light,
        };
        assert_eq!(Theme::new(&config), Theme::light());
    }

    #[test]
    fn test_system_mode_defers_to_terminal() {
        let config = ThemeConfig {
            use_system_color_mode: true,
            initial_color_mode: ColorMode::Light,
        };
        let theme = Theme::new(&config);
        assert_eq!(theme.fg, Color::Reset);
        assert_eq!(theme.bg, Color::Reset);
    }

    #[test]
    fn test_color_mode_deserializes_lowercase() {
        let mode: ColorMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ColorMode::Light);
    }
}

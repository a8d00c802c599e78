//! Theme support for the ruler GUI
//!
//! Provides the color schemes used to paint the ruler body, its ticks and the
//! measurement overlays, plus the egui visuals that go with them. Two built-in
//! themes exist, "Light" and "Dark".
//!
//! # Examples
//!
//! ```
//! use ruler::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let light = manager.theme_or_default("Light");
//! println!("Light ruler body: {:?}", light.colors.primary);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when none has been chosen.
pub const DEFAULT_THEME: &str = "Dark";

/// Color palette of a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Window background behind the ruler
    pub background: Color32,
    /// Ruler body and measurement readouts
    pub primary: Color32,
    /// Ticks and tick labels drawn on the ruler body
    pub on_primary: Color32,
    /// Measurement overlay fill (before alpha)
    pub secondary: Color32,
    /// Widget and dialog text
    pub text: Color32,
}

/// A named color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.name != "Light"
    }
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns the default theme
    pub fn current_theme(&self) -> &Theme {
        self.theme_or_default(DEFAULT_THEME)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Returns the theme listed after `name`, wrapping around
    pub fn next_theme_name(&self, name: &str) -> String {
        let names = self.list_themes();
        let next = names
            .iter()
            .position(|n| *n == name)
            .map(|i| (i + 1) % names.len())
            .unwrap_or(0);
        names.get(next).copied().unwrap_or(DEFAULT_THEME).to_string()
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.background;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.secondary;
        visuals.selection.stroke.color = colors.primary;

        visuals.widgets.inactive.bg_fill = colors.primary;
        visuals.widgets.inactive.weak_bg_fill = colors.primary;
        visuals.widgets.hovered.weak_bg_fill = adjust_brightness(colors.primary, 1.15);
        visuals.widgets.active.weak_bg_fill = with_alpha(colors.primary, 128);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#fffbfe"),
            primary: hex_to_color32("#6650a4"),
            on_primary: hex_to_color32("#fffbfe"),
            secondary: hex_to_color32("#625b71"),
            text: hex_to_color32("#1c1b1f"),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1c1b1f"),
            primary: hex_to_color32("#d0bcff"),
            on_primary: hex_to_color32("#1c1b1f"),
            secondary: hex_to_color32("#ccc2dc"),
            text: hex_to_color32("#e6e1e5"),
        },
    }
}

/// Converts a hex color string (like "#6650a4") to Color32.
///
/// Anything that is not six hex digits yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };

    match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
        _ => Color32::BLACK,
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

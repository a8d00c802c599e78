//! Light/Dark theme selection.

use ruler::{ThemeColors, ThemeManager};

/// Which of the built-in palettes the ruler is painted with.
pub struct ThemeState {
    themes: ThemeManager,
    /// Stored under "theme_preference"; may name a theme that no longer exists
    selected: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self::with_theme(ruler::theme::DEFAULT_THEME.to_string())
    }

    /// Restores a selection read from storage.
    pub fn with_theme(selected: String) -> Self {
        Self {
            themes: ThemeManager::new(),
            selected,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.themes
    }

    pub fn current_theme_name(&self) -> &str {
        &self.selected
    }

    /// Palette for the ruler, overlays and toolbar; unknown names get the dark one.
    pub fn colors(&self) -> &ThemeColors {
        &self.themes.theme_or_default(&self.selected).colors
    }

    /// Flips between Light and Dark.
    pub fn cycle_theme(&mut self) {
        self.selected = self.themes.next_theme_name(&self.selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_flips_palette() {
        let mut state = ThemeState::new();
        let dark_background = state.colors().background;

        state.cycle_theme();
        assert_eq!(state.current_theme_name(), "Light");
        assert_ne!(state.colors().background, dark_background);

        state.cycle_theme();
        assert_eq!(state.current_theme_name(), "Dark");
    }

    #[test]
    fn test_stale_stored_name_uses_dark_palette() {
        let state = ThemeState::with_theme("Solarized".to_string());
        let dark = ThemeState::new();
        assert_eq!(state.colors().background, dark.colors().background);
    }
}

use crate::utils::Theme;

/// Class the stylesheet's `dark:` variants are keyed on.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeConfig {
    pub dark_class: &'static str,
    pub initial: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_class: DARK_CLASS,
            initial: Theme::Light,
        }
    }
}

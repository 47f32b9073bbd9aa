use std::fmt::{ Display, Formatter };

/// The two visual modes the page can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl From<bool> for Theme {
    fn from(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self { is_dark: initial.is_dark() }
    }

    pub fn theme(&self) -> Theme {
        Theme::from(self.is_dark)
    }

    /// Returns `true` when the value actually changed.
    pub fn set_dark(&mut self, value: bool) -> bool {
        if self.is_dark == value {
            return false;
        }
        self.is_dark = value;
        true
    }

    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }
}

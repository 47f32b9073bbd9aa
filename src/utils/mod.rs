mod root_flag;
mod theme_context;
mod theme_state;
mod theme_sync;

pub use root_flag::*;
pub use theme_context::{ use_theme, use_theme_provider, use_theme_provider_with, ThemeContext, MAX_SYNC_ATTEMPTS };
pub use theme_state::{ Theme, ThemeState };
pub use theme_sync::ThemeSync;

mod logging;
mod theme_config;

pub use logging::init_logging;
pub use theme_config::{ ThemeConfig, DARK_CLASS };

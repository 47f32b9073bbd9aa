use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::configs::ThemeConfig;
use crate::utils::{ PlatformRoot, RootFlag, Theme, ThemeState, ThemeSync };

/// Attempts per theme value before a failing root write is given up on.
pub const MAX_SYNC_ATTEMPTS: u32 = 3;

/// Application-wide handle to the theme. Components change the theme through
/// this handle; only the provider writes the document root.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    state: Signal<ThemeState>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.state.read().is_dark
    }

    pub fn theme(&self) -> Theme {
        self.state.read().theme()
    }

    pub fn set_dark(&self, value: bool) {
        let mut state = self.state;
        if state.peek().is_dark == value {
            return;
        }
        state.write().set_dark(value);
        log::debug!("Theme changed to {}", Theme::from(value));
    }

    pub fn toggle(&self) {
        let is_dark = self.state.peek().is_dark;
        self.set_dark(!is_dark);
    }
}

/// Creates the theme state, installs the document root sync and provides the
/// context to every descendant.
pub fn use_theme_provider(config: ThemeConfig) -> ThemeContext {
    use_theme_provider_with(config, move || PlatformRoot::new(config.dark_class))
}

/// Same as [`use_theme_provider`] with the root flag supplied by the caller.
/// `root` runs once, on first render.
pub fn use_theme_provider_with<R, F>(config: ThemeConfig, root: F) -> ThemeContext
    where R: RootFlag + 'static, F: FnOnce() -> R
{
    let state = use_signal(|| ThemeState::new(config.initial));
    let mut retry = use_signal(|| 0u32);
    let sync = use_hook(|| Rc::new(RefCell::new(ThemeSync::new(root()))));

    use_effect(move || {
        let is_dark = state.read().is_dark;
        // subscribe so a scheduled retry reruns this effect
        let _ = retry.read();

        let mut sync = sync.borrow_mut();
        if let Err(e) = sync.apply(is_dark) {
            if sync.failures() < MAX_SYNC_ATTEMPTS {
                log::debug!("Root theme flag write failed (attempt {}), retrying: {}", sync.failures(), e);
                spawn(async move {
                    *retry.write() += 1;
                });
            } else {
                log::warn!("Failed to sync root theme flag after {} attempts: {}", sync.failures(), e);
            }
        }
    });

    use_context_provider(|| ThemeContext { state })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

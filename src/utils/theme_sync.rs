use crate::error::ThemeError;
use crate::utils::RootFlag;

/// Mirrors the theme onto a [`RootFlag`], writing only on change.
pub struct ThemeSync<F: RootFlag> {
    flag: F,
    applied: Option<bool>,
    target: Option<bool>,
    failures: u32,
}

impl<F: RootFlag> ThemeSync<F> {
    pub fn new(flag: F) -> Self {
        let applied = match flag.is_present() {
            Ok(present) => Some(present),
            Err(e) => {
                log::debug!("Root flag state unknown, first sync will write: {}", e);
                None
            }
        };
        Self { flag, applied, target: None, failures: 0 }
    }

    /// Returns `Ok(true)` when a write was issued. A failed write leaves the
    /// last applied value untouched and counts against the current target.
    pub fn apply(&mut self, is_dark: bool) -> Result<bool, ThemeError> {
        if self.target != Some(is_dark) {
            self.target = Some(is_dark);
            self.failures = 0;
        }
        if self.applied == Some(is_dark) {
            self.failures = 0;
            return Ok(false);
        }
        if let Err(e) = self.flag.set_present(is_dark) {
            self.failures += 1;
            return Err(e);
        }
        self.applied = Some(is_dark);
        self.failures = 0;
        log::debug!("Root theme flag {}", if is_dark { "set" } else { "cleared" });
        Ok(true)
    }

    /// Consecutive failed writes for the value last passed to `apply`.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn applied(&self) -> Option<bool> {
        self.applied
    }

    pub fn flag(&self) -> &F {
        &self.flag
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::utils::RootFlag;

#[derive(Debug, Default)]
struct RootState {
    present: bool,
    writes: usize,
    failing_writes: usize,
}

/// In-memory root flag. Clones share state, so a test keeps one handle while
/// the theme provider owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    state: Rc<RefCell<RootState>>,
}

#[allow(dead_code)]
impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_present(present: bool) -> Self {
        let root = Self::default();
        root.state.borrow_mut().present = present;
        root
    }

    /// Rejects the next `writes` writes.
    pub fn fail_next(&self, writes: usize) {
        self.state.borrow_mut().failing_writes = writes;
    }

    pub fn present(&self) -> bool {
        self.state.borrow().present
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn same_as(&self, other: &MemoryRoot) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl RootFlag for MemoryRoot {
    fn is_present(&self) -> Result<bool, ThemeError> {
        Ok(self.state.borrow().present)
    }

    fn set_present(&mut self, present: bool) -> Result<(), ThemeError> {
        let mut state = self.state.borrow_mut();
        if state.failing_writes > 0 {
            state.failing_writes -= 1;
            return Err(ThemeError::NoRootElement);
        }
        state.present = present;
        state.writes += 1;
        Ok(())
    }
}

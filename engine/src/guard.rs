//! Reentrancy Guard
//!
//! Process-wide exclusion for mutating entry points. While one mutating
//! call is in progress, any nested attempt to enter another fails
//! immediately with `ReentrantCallRejected` rather than block or queue.
//! Read-only queries never take the guard; they only observe committed
//! ledger state.

use core::cell::Cell;

use crate::errors::{EngineError, EngineResult};
use crate::Rc;

/// Call-exclusion flag shared with the permits it hands out.
#[derive(Debug, Clone, Default)]
pub struct ReentrancyGuard {
    engaged: Rc<Cell<bool>>,
}

impl ReentrancyGuard {
    /// Create a released guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the guard for the duration of one mutating call.
    ///
    /// The returned permit releases the guard when dropped, including on
    /// early error returns.
    pub fn enter(&self) -> EngineResult<CallPermit> {
        if self.engaged.get() {
            return Err(EngineError::ReentrantCallRejected);
        }
        self.engaged.set(true);
        Ok(CallPermit {
            engaged: Rc::clone(&self.engaged),
        })
    }

    /// Whether a mutating call is currently in progress
    pub fn is_engaged(&self) -> bool {
        self.engaged.get()
    }
}

/// RAII permit for one mutating call.
#[derive(Debug)]
pub struct CallPermit {
    engaged: Rc<Cell<bool>>,
}

impl Drop for CallPermit {
    fn drop(&mut self) {
        self.engaged.set(false);
    }
}

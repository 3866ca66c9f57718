//! Detector-to-renderer handoff
//!
//! Holds only the most recent gesture state. Publishing overwrites; reading
//! never consumes, so a slow detector leaves the renderer re-reading the
//! last state.

use std::sync::Arc;

use gestura_core::GestureState;
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Slot {
    state: GestureState,
    sequence: u64,
}

/// Shared latest-value cell for gesture states
#[derive(Debug, Clone, Default)]
pub struct GestureLatch {
    inner: Arc<Mutex<Slot>>,
}

impl GestureLatch {
    /// A latch holding the absent state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latched state
    pub fn publish(&self, state: GestureState) {
        let mut slot = self.inner.lock();
        slot.state = state;
        slot.sequence += 1;
    }

    /// Most recently published state
    pub fn latest(&self) -> GestureState {
        self.inner.lock().state
    }

    /// Number of publishes so far
    pub fn sequence(&self) -> u64 {
        self.inner.lock().sequence
    }

    /// Latest state together with its publish sequence
    pub fn snapshot(&self) -> (u64, GestureState) {
        let slot = self.inner.lock();
        (slot.sequence, slot.state)
    }
}

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A cooperative stop request shared between a running simulation and the
/// code that wants to stop it.
///
/// Clones share the same flag, so one clone can be handed to a signal handler
/// or another thread while the simulation loop polls another. The loop only
/// checks the flag between steps; a raised interrupt never cuts a step short.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// Creates an interrupt that has not been raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the simulation stop before its next step.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`raise`](Self::raise) has been called on any clone.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Clears a previous request so the token can be reused for another run.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::SeqCst);
    }
}

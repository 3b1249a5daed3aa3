use sine_gordon_core::{Interrupt, Observer};

use crate::traits::CanStopEarly;

/// Requests an early stop once an [`Interrupt`] has been raised.
///
/// The simulation loop already polls the token it is given. This observer is
/// for callers that can only hand over an observer, such as a front end that
/// composes several observers into one closure.
#[derive(Debug, Clone, Default)]
pub struct InterruptObserver {
    interrupt: Interrupt,
}

impl InterruptObserver {
    #[must_use]
    pub fn new(interrupt: Interrupt) -> Self {
        Self { interrupt }
    }

    /// Returns a handle to the watched token.
    #[must_use]
    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for InterruptObserver {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.interrupt.is_raised().then(A::stop_early)
    }
}

use parking_lot::RwLock;
use std::{ops::ControlFlow, sync::Arc};

use crate::swarm::{Swarm, SwarmStatus};

/// A trait for read-only callbacks run after every iteration of [`Swarm::run`].
///
/// Observers see the whole [`Swarm`] but cannot change it or stop the run. Wrap an observer in
/// `Arc<RwLock<_>>` to keep a handle on it after the run.
pub trait Observer {
    /// Called once after each completed iteration.
    fn observe(&mut self, iteration: usize, swarm: &Swarm);
}
impl<T: Observer> Observer for Arc<RwLock<T>> {
    fn observe(&mut self, iteration: usize, swarm: &Swarm) {
        self.write().observe(iteration, swarm);
    }
}

/// A trait for callbacks which decide when [`Swarm::run`] stops.
///
/// The swarm itself has no notion of convergence, so every stopping rule lives here.
pub trait Terminator {
    /// Called once after each completed iteration. Returning [`ControlFlow::Break`] ends the run;
    /// the terminator should leave a reason in `status`.
    fn check_for_termination(
        &mut self,
        iteration: usize,
        swarm: &Swarm,
        status: &mut SwarmStatus,
    ) -> ControlFlow<()>;
}
impl<T: Terminator> Terminator for Arc<RwLock<T>> {
    fn check_for_termination(
        &mut self,
        iteration: usize,
        swarm: &Swarm,
        status: &mut SwarmStatus,
    ) -> ControlFlow<()> {
        self.write().check_for_termination(iteration, swarm, status)
    }
}

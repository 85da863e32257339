use crate::{
    core::Point,
    swarm::{Swarm, SwarmStatus},
    traits::{Observer, Terminator},
    DVector, Float,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{ops::ControlFlow, sync::Arc};

enum CallbackLike {
    Terminator(Box<dyn Terminator>),
    Observer(Box<dyn Observer>),
}
impl CallbackLike {
    fn callback(
        &mut self,
        iteration: usize,
        swarm: &Swarm,
        status: &mut SwarmStatus,
    ) -> ControlFlow<()> {
        match self {
            Self::Terminator(terminator) => {
                terminator.check_for_termination(iteration, swarm, status)
            }
            Self::Observer(observer) => {
                observer.observe(iteration, swarm);
                ControlFlow::Continue(())
            }
        }
    }
}

/// A set of [`Terminator`]s and/or [`Observer`]s which can be used as an input to [`Swarm::run`].
///
/// Callbacks run in insertion order after every iteration. All of them run even when an earlier
/// one asks to stop, so observers always see the final iteration.
#[derive(Default)]
pub struct Callbacks(Vec<CallbackLike>);
impl Callbacks {
    /// Create an empty set of callbacks.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Return the set of [`Callbacks`] with an additional [`Terminator`] added.
    pub fn with_terminator<T>(mut self, terminator: T) -> Self
    where
        T: Terminator + 'static,
    {
        self.0.push(CallbackLike::Terminator(Box::new(terminator)));
        self
    }

    /// Return the set of [`Callbacks`] with an additional [`Observer`] added.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: Observer + 'static,
    {
        self.0.push(CallbackLike::Observer(Box::new(observer)));
        self
    }

    /// The number of registered callbacks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl Terminator for Callbacks {
    fn check_for_termination(
        &mut self,
        iteration: usize,
        swarm: &Swarm,
        status: &mut SwarmStatus,
    ) -> ControlFlow<()> {
        let mut flow = ControlFlow::Continue(());
        for callback in &mut self.0 {
            if callback.callback(iteration, swarm, status).is_break() {
                flow = ControlFlow::Break(());
            }
        }
        flow
    }
}

/// A [`Terminator`] which stops the run once the swarm has completed a number of iterations.
pub struct MaxSteps(pub usize);
impl Default for MaxSteps {
    fn default() -> Self {
        Self(500)
    }
}
impl Terminator for MaxSteps {
    fn check_for_termination(
        &mut self,
        iteration: usize,
        _swarm: &Swarm,
        status: &mut SwarmStatus,
    ) -> ControlFlow<()> {
        if iteration >= self.0 {
            status.update_message(&format!("Maximum number of steps reached ({})!", self.0));
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// A [`Terminator`] which stops the run when the global best has not improved by more than
/// `tolerance` for `patience` consecutive iterations, and marks the run as converged.
#[derive(Clone, Debug)]
pub struct StagnationTerminator {
    /// How many non-improving iterations are tolerated.
    pub patience: usize,
    /// The smallest decrease of the global best that counts as an improvement.
    pub tolerance: Float,
    last_best: Option<Float>,
    stale: usize,
}
impl StagnationTerminator {
    /// Create a new [`StagnationTerminator`].
    pub const fn new(patience: usize, tolerance: Float) -> Self {
        Self {
            patience,
            tolerance,
            last_best: None,
            stale: 0,
        }
    }
}
impl Default for StagnationTerminator {
    fn default() -> Self {
        Self::new(50, 0.0)
    }
}
impl Terminator for StagnationTerminator {
    fn check_for_termination(
        &mut self,
        _iteration: usize,
        swarm: &Swarm,
        status: &mut SwarmStatus,
    ) -> ControlFlow<()> {
        let fx = swarm.global_best_point().fx;
        let improved = match self.last_best {
            Some(last) => fx < last - self.tolerance || (last.is_nan() && !fx.is_nan()),
            None => true,
        };
        if improved {
            self.last_best = Some(fx);
            self.stale = 0;
        } else {
            self.stale += 1;
        }
        if self.stale >= self.patience {
            status.converged = true;
            status.update_message(&format!(
                "Global best unchanged for {} iterations",
                self.stale
            ));
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// A debugging observer which prints the iteration and the global best.
pub struct DebugObserver;
impl Observer for DebugObserver {
    fn observe(&mut self, iteration: usize, swarm: &Swarm) {
        println!("Iteration: {}, {}", iteration, swarm.global_best_point());
    }
}

/// An [`Observer`] which stores the particle positions and the global best after every
/// iteration, which is what a visualization replays.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct TrackingObserver {
    /// The positions of every particle, one entry per iteration
    pub history: Vec<Vec<DVector<Float>>>,
    /// The global best, one entry per iteration
    pub best_history: Vec<Point>,
}
impl TrackingObserver {
    /// Finalize the [`TrackingObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}
impl Observer for TrackingObserver {
    fn observe(&mut self, _iteration: usize, swarm: &Swarm) {
        self.history.push(swarm.positions());
        self.best_history.push(swarm.global_best_point().clone());
    }
}

/// Basic implementations of [`AbortSignal`](crate::traits::AbortSignal)
pub mod abort_signals;
/// [`Bound`] type for confining variables to a range.
pub mod bound;
/// [`Callbacks`] and the stock [`Observer`](crate::traits::Observer)s and
/// [`Terminator`](crate::traits::Terminator)s.
pub mod callbacks;
/// [`Point`] type for defining a point in the parameter space.
pub mod point;
/// [`SwarmSummary`] type for the result of a run.
pub mod summary;
/// Sampling helpers and the warning switch.
pub mod utils;

pub use abort_signals::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};
pub use bound::{Bound, Bounds};
pub use callbacks::{Callbacks, DebugObserver, MaxSteps, StagnationTerminator, TrackingObserver};
pub use point::Point;
pub use summary::SwarmSummary;

/// Module containing the [`AbortSignal`] trait.
pub mod abort_signal;
/// Module containing the [`Observer`] and [`Terminator`] traits.
pub mod callback;
/// Module containing the [`Objective`] trait.
pub mod objective;

pub use abort_signal::AbortSignal;
pub use callback::{Observer, Terminator};
pub use objective::Objective;

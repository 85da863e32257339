/// A trait for abort signals.
///
/// [`Swarm::run`](`crate::swarm::Swarm::run`) checks the signal before every iteration, so an
/// abort takes effect between iterations and never inside one.
pub trait AbortSignal {
    /// Return `true` if the user has requested to abort the run.
    fn is_aborted(&self) -> bool;
    /// Abort the run. Make `is_aborted()` return `true`.
    fn abort(&self);
    /// Reset the abort signal. Make `is_aborted()` return `false`.
    fn reset(&self);
}

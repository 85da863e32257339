/// Module containing the quadratic bowl.
pub mod bowl;
pub use bowl::Bowl;

/// Module containing the Schwefel test function.
pub mod schwefel;
pub use schwefel::Schwefel;

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

//! `swarmfit` is a small particle swarm optimization (PSO) engine built to drive visualizations
//! of swarms exploring test surfaces such as a quadratic bowl or the Schwefel function. The
//! caller builds a [`Swarm`](`swarm::Swarm`) from a [`SwarmConfig`](`swarm::SwarmConfig`) and an
//! [`Objective`](`traits::Objective`), then repeatedly calls
//! [`advance_iteration`](`swarm::Swarm::advance_iteration`) and reads back
//! [`positions`](`swarm::Swarm::positions`) and the [`global_best`](`swarm::Swarm::global_best`)
//! for display.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Bounds and Penalties](#bounds-and-penalties)
//!
//! # Key Features
//! * A single trait, [`Objective`](`traits::Objective`), is all that is needed to plug in a new
//!   test function. The particle and swarm update rules never change.
//! * Seeded [`fastrand::Rng`] generators give bit-identical trajectories.
//! * Configuration errors are reported once, at construction, as a [`SwarmError`].
//! * Optional caller-side helpers ([`Callbacks`](`core::Callbacks`), [`MaxSteps`](`core::MaxSteps`),
//!   [`StagnationTerminator`](`core::StagnationTerminator`),
//!   [`TrackingObserver`](`core::TrackingObserver`)) for driving a whole run with
//!   [`Swarm::run`](`swarm::Swarm::run`).
//!
//! # Quick Start
//!
//! ```rust
//! use fastrand::Rng;
//! use swarmfit::prelude::*;
//! use swarmfit::objectives::Bowl;
//!
//! let config = SwarmConfig::default()
//!     .with_n_particles(50)
//!     .with_bounds(vec![(-100.0, 100.0); 2])
//!     .with_omega(0.5)
//!     .with_c1(1.5)
//!     .with_c2(1.5);
//! let mut swarm = Swarm::new(config, Bowl, Rng::with_seed(0)).unwrap();
//! for _ in 0..500 {
//!     swarm.advance_iteration();
//! }
//! let (x, fx) = swarm.global_best();
//! assert_eq!(x.len(), 2);
//! assert!(fx < 1.0);
//! ```
//!
//! # Bounds and Penalties
//!
//! Every particle is clamped into its per-dimension `[min, max]` box after each move. The fitness
//! used for best-tracking is the objective value plus a penalty,
//!
//! ```math
//! f(\vec{x}) + c \sum_i \left[\max(0, x_i - x_{\text{max},i})^2 + \max(0, x_{\text{min},i} - x_i)^2\right]
//! ```
//!
//! which vanishes everywhere inside the box, including its edges.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing core types like [`Point`](`core::Point`) and [`Bounds`](`core::Bounds`).
pub mod core;
/// Module containing the crate's error type.
pub mod error;
/// Module containing the test surfaces used by the demos.
pub mod objectives;
/// Module containing the [`Swarm`](`swarm::Swarm`) and its particles.
pub mod swarm;
/// Module containing the traits which make up the crate's extension points.
pub mod traits;

pub use error::SwarmError;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        core::{Bound, Bounds, Callbacks, MaxSteps, Point, StagnationTerminator},
        swarm::{Swarm, SwarmConfig, SwarmParticle, SwarmUpdateMethod},
        traits::{AbortSignal, Objective, Observer, Terminator},
        Float, SwarmError,
    };
}

pub use nalgebra::DVector;

/// The floating-point type used throughout the crate.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

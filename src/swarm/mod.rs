//! Particle swarm optimization.
//!
//! A [`Swarm`] owns a fixed population of [`SwarmParticle`]s. Each call to
//! [`Swarm::advance_iteration`] updates every particle's velocity as
//!
//! ```math
//! v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
//! ```
//! where $`r_1`$ and $`r_2`$ are vectors of independent uniform draws in $`[0,1)`$, $`\omega`$ is
//! the inertial weight, $`c_1`$ and $`c_2`$ are the cognitive and social weights, $`p_i^t`$ is the
//! particle's personal best position and $`g^t`$ is the swarm's global best position. The particle
//! then moves by its velocity and is clamped back into the search box. See [^1] for more
//! information.
//!
//! [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)

/// [`SwarmConfig`] and the initializers it selects.
pub mod config;
pub use config::{
    SwarmConfig, SwarmPositionInitializer, SwarmUpdateMethod, SwarmVelocityInitializer,
};

/// [`SwarmParticle`] type holding one candidate solution.
pub mod particle;
pub use particle::SwarmParticle;

/// [`SwarmStatus`] type written by terminators during a run.
pub mod status;
pub use status::SwarmStatus;

#[allow(clippy::module_inception)]
mod swarm;
pub use swarm::Swarm;

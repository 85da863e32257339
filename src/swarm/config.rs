use crate::{
    core::{
        utils::{generate_random_vector, generate_random_vector_in_limits, SampleFloat},
        Bounds,
    },
    traits::Objective,
    DVector, Float, SwarmError,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// The configuration of a [`Swarm`](`super::Swarm`).
///
/// Every setter takes and returns the configuration by value so that it can be chained from
/// [`SwarmConfig::default`]. Nothing is checked until [`Swarm::new`](`super::Swarm::new`), which
/// rejects unusable settings with a [`SwarmError`].
///
/// The hyperparameters stored here are the ones used by every velocity update; there are no
/// separate built-in constants. The defaults (`omega = 0.5`, `c1 = c2 = 1.5`) are the classic
/// values used by the paraboloid and Schwefel demos.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwarmConfig {
    n_particles: usize,
    bounds: Bounds,
    omega: Float,
    c1: Float,
    c2: Float,
    penalty_coefficient: Float,
    velocity_limit: Option<Float>,
    update_method: SwarmUpdateMethod,
    position_initializer: SwarmPositionInitializer,
    velocity_initializer: SwarmVelocityInitializer,
}
impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            n_particles: 50,
            bounds: Bounds::default(),
            omega: 0.5,
            c1: 1.5,
            c2: 1.5,
            penalty_coefficient: 10000.0,
            velocity_limit: None,
            update_method: SwarmUpdateMethod::default(),
            position_initializer: SwarmPositionInitializer::default(),
            velocity_initializer: SwarmVelocityInitializer::default(),
        }
    }
}
impl SwarmConfig {
    /// Sets the number of particles (default = `50`, must be at least `1`).
    pub const fn with_n_particles(mut self, value: usize) -> Self {
        self.n_particles = value;
        self
    }
    /// Sets the per-dimension bounds of the search space (required).
    pub fn with_bounds<B: Into<Bounds>>(mut self, bounds: B) -> Self {
        self.bounds = bounds.into();
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.5`).
    pub const fn with_omega(mut self, value: Float) -> Self {
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move towards
    /// its personal best (default = `1.5`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards the
    /// global best (default = `1.5`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the coefficient passed to [`Objective::penalty`] (default = `10000.0`).
    pub const fn with_penalty_coefficient(mut self, value: Float) -> Self {
        self.penalty_coefficient = value;
        self
    }
    /// Caps every velocity component to `[-limit, limit]` after each velocity update
    /// (default = `None`, velocities are unbounded).
    pub const fn with_velocity_limit(mut self, limit: Option<Float>) -> Self {
        self.velocity_limit = limit;
        self
    }
    /// Sets the [`SwarmUpdateMethod`] (default = [`SwarmUpdateMethod::Asynchronous`]).
    pub const fn with_update_method(mut self, value: SwarmUpdateMethod) -> Self {
        self.update_method = value;
        self
    }
    /// Sets the [`SwarmPositionInitializer`] (default =
    /// [`SwarmPositionInitializer::RandomInBounds`]).
    pub fn with_position_initializer(mut self, value: SwarmPositionInitializer) -> Self {
        self.position_initializer = value;
        self
    }
    /// Sets the [`SwarmVelocityInitializer`] (default =
    /// [`SwarmVelocityInitializer::Uniform(-1.0, 1.0)`](SwarmVelocityInitializer::Uniform)).
    pub fn with_velocity_initializer(mut self, value: SwarmVelocityInitializer) -> Self {
        self.velocity_initializer = value;
        self
    }

    /// The number of particles.
    pub const fn n_particles(&self) -> usize {
        self.n_particles
    }
    /// The bounds of the search space.
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }
    /// The inertial weight $`\omega`$.
    pub const fn omega(&self) -> Float {
        self.omega
    }
    /// The cognitive weight $`c_1`$.
    pub const fn c1(&self) -> Float {
        self.c1
    }
    /// The social weight $`c_2`$.
    pub const fn c2(&self) -> Float {
        self.c2
    }
    /// The penalty coefficient.
    pub const fn penalty_coefficient(&self) -> Float {
        self.penalty_coefficient
    }
    /// The optional velocity cap.
    pub const fn velocity_limit(&self) -> Option<Float> {
        self.velocity_limit
    }
    /// The update method.
    pub const fn update_method(&self) -> SwarmUpdateMethod {
        self.update_method
    }
    /// The position initializer.
    pub const fn position_initializer(&self) -> &SwarmPositionInitializer {
        &self.position_initializer
    }
    /// The velocity initializer.
    pub const fn velocity_initializer(&self) -> &SwarmVelocityInitializer {
        &self.velocity_initializer
    }

    /// Checks the configuration against itself and against `objective`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] for an empty swarm, invalid bounds, an
    /// objective of a different dimension, negative or non-finite coefficients, or an initializer
    /// with the wrong number of entries. Returns [`SwarmError::InvalidDimension`] when a supplied
    /// start position or velocity limit vector has the wrong length.
    pub fn validate(&self, objective: &dyn Objective) -> Result<(), SwarmError> {
        if self.n_particles == 0 {
            return Err(SwarmError::config("swarm must contain at least one particle"));
        }
        self.bounds.validate()?;
        let dimension = self.bounds.dimension();
        if let Some(expected) = objective.dimension() {
            if expected != dimension {
                return Err(SwarmError::config(format!(
                    "objective expects {expected} dimensions but bounds cover {dimension}"
                )));
            }
        }
        for (name, value) in [
            ("omega", self.omega),
            ("c1", self.c1),
            ("c2", self.c2),
            ("penalty coefficient", self.penalty_coefficient),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SwarmError::config(format!(
                    "{name} must be finite and non-negative, found {value}"
                )));
            }
        }
        if let Some(limit) = self.velocity_limit {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(SwarmError::config(format!(
                    "velocity limit must be finite and positive, found {limit}"
                )));
            }
        }
        self.position_initializer.validate(self.n_particles, dimension)?;
        self.velocity_initializer.validate(dimension)?;
        Ok(())
    }
}

/// The order in which particles see each other's progress within one iteration.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwarmUpdateMethod {
    /// Particles are moved in index order and the global best is updated right after each move,
    /// so later particles in the same pass are attracted to improvements found earlier in it.
    #[default]
    Asynchronous,
    /// The global best is frozen for the whole pass and only updated once every particle has
    /// moved (generational PSO).
    Synchronous,
}

/// Methods to initialize the positions of particles in a swarm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum SwarmPositionInitializer {
    /// Independent uniform draws inside the bounds
    #[default]
    RandomInBounds,
    /// Latin Hypercube sampling inside the bounds
    LatinHypercube,
    /// Explicit start positions, one per particle. Positions outside the bounds are clamped.
    Custom(Vec<DVector<Float>>),
}
impl SwarmPositionInitializer {
    fn validate(&self, n_particles: usize, dimension: usize) -> Result<(), SwarmError> {
        if let Self::Custom(positions) = self {
            if positions.len() != n_particles {
                return Err(SwarmError::config(format!(
                    "{} custom positions supplied for {n_particles} particles",
                    positions.len()
                )));
            }
            for position in positions {
                SwarmError::check_dimension(dimension, position.len())?;
            }
        }
        Ok(())
    }
    /// Initialize the positions of `n_particles` particles inside `bounds`.
    pub fn init_positions(
        &self,
        rng: &mut Rng,
        bounds: &Bounds,
        n_particles: usize,
    ) -> Vec<DVector<Float>> {
        match self {
            Self::RandomInBounds => (0..n_particles)
                .map(|_| bounds.random_vector_in(rng))
                .collect(),
            Self::LatinHypercube => {
                let dimension = bounds.dimension();
                let mut lhs_matrix = vec![DVector::zeros(dimension); n_particles];
                for (d, bound) in bounds.iter().enumerate() {
                    let mut bins: Vec<usize> = (0..n_particles).collect();
                    rng.shuffle(&mut bins);
                    let bin_size = bound.width() / n_particles as Float;
                    for (i, &bin) in bins.iter().enumerate() {
                        let lower = (bin as Float).mul_add(bin_size, bound.lower());
                        lhs_matrix[i][d] = if bin_size > 0.0 {
                            rng.range(lower, lower + bin_size)
                        } else {
                            lower
                        };
                    }
                }
                lhs_matrix
            }
            Self::Custom(positions) => positions.clone(),
        }
    }
}

/// Methods for setting the initial velocity of particles in a swarm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SwarmVelocityInitializer {
    /// Initialize all velocities to zero
    Zero,
    /// Draw every component uniformly from `[lower, upper)`
    Uniform(Float, Float),
    /// Draw each dimension uniformly from its own `[lower, upper)` range
    RandomInLimits(Vec<(Float, Float)>),
}
impl Default for SwarmVelocityInitializer {
    fn default() -> Self {
        Self::Uniform(-1.0, 1.0)
    }
}
impl SwarmVelocityInitializer {
    fn validate(&self, dimension: usize) -> Result<(), SwarmError> {
        let limits: Vec<(Float, Float)> = match self {
            Self::Zero => Vec::new(),
            Self::Uniform(lower, upper) => vec![(*lower, *upper)],
            Self::RandomInLimits(limits) => {
                SwarmError::check_dimension(dimension, limits.len())?;
                limits.clone()
            }
        };
        for (lower, upper) in limits {
            if !(lower.is_finite() && upper.is_finite()) || lower > upper {
                return Err(SwarmError::config(format!(
                    "velocity range ({lower}, {upper}) must be finite and ordered"
                )));
            }
        }
        Ok(())
    }
    /// Initialize the velocities of `n_particles` particles in a `dimension`-dimensional space.
    pub fn init_velocities(
        &self,
        rng: &mut Rng,
        dimension: usize,
        n_particles: usize,
    ) -> Vec<DVector<Float>> {
        match self {
            Self::Zero => (0..n_particles)
                .map(|_| DVector::zeros(dimension))
                .collect(),
            Self::Uniform(lower, upper) => (0..n_particles)
                .map(|_| generate_random_vector(dimension, *lower, *upper, rng))
                .collect(),
            Self::RandomInLimits(limits) => (0..n_particles)
                .map(|_| generate_random_vector_in_limits(limits, rng))
                .collect(),
        }
    }
}

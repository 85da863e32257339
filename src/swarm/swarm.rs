use crate::{
    core::{utils::maybe_warn, Bounds, Callbacks, MaxSteps, Point, SwarmSummary},
    traits::{AbortSignal, Objective, Terminator},
    DVector, Float, SwarmError,
};
use fastrand::Rng;

use super::{SwarmConfig, SwarmParticle, SwarmStatus, SwarmUpdateMethod};

/// A swarm of particles minimizing an [`Objective`] inside a box.
///
/// The swarm is built once with [`Swarm::new`], which is the only place errors can occur, and then
/// driven by the caller through [`Swarm::advance_iteration`] (or [`Swarm::run`]). After any number
/// of iterations:
///
/// * every particle position lies inside the configured [`Bounds`],
/// * the global best is no worse than any particle's personal best,
/// * the stored global best value is exactly the fitness of the stored global best position,
/// * the global best value has never increased.
///
/// ```rust
/// use fastrand::Rng;
/// use swarmfit::{objectives::Schwefel, swarm::{Swarm, SwarmConfig}};
///
/// let config = SwarmConfig::default()
///     .with_n_particles(20)
///     .with_bounds(vec![(-500.0, 500.0); 2]);
/// let mut swarm = Swarm::new(config, Schwefel::new(), Rng::with_seed(1)).unwrap();
/// let (_, before) = swarm.global_best();
/// swarm.advance_iteration();
/// let (_, after) = swarm.global_best();
/// assert!(after <= before);
/// assert_eq!(swarm.positions().len(), 20);
/// ```
#[derive(Clone)]
pub struct Swarm {
    config: SwarmConfig,
    objective: Box<dyn Objective>,
    rng: Rng,
    particles: Vec<SwarmParticle>,
    gbest: Point,
    iteration: usize,
    cost_evals: usize,
}

impl Swarm {
    /// Build a swarm from a configuration, an objective and a random number generator.
    ///
    /// All positions are drawn first (one particle after another), then all velocities. The
    /// global best is the best starting point of the whole population.
    ///
    /// # Errors
    ///
    /// Returns the error of [`SwarmConfig::validate`] if the configuration is unusable.
    pub fn new<O>(config: SwarmConfig, objective: O, rng: Rng) -> Result<Self, SwarmError>
    where
        O: Objective + 'static,
    {
        Self::from_boxed(config, Box::new(objective), rng)
    }

    /// Like [`Swarm::new`], for an objective that was already chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns the error of [`SwarmConfig::validate`] if the configuration is unusable.
    pub fn from_boxed(
        config: SwarmConfig,
        objective: Box<dyn Objective>,
        mut rng: Rng,
    ) -> Result<Self, SwarmError> {
        config.validate(objective.as_ref())?;
        let bounds = config.bounds();
        let n_particles = config.n_particles();
        let positions = config
            .position_initializer()
            .init_positions(&mut rng, bounds, n_particles);
        let velocities = config.velocity_initializer().init_velocities(
            &mut rng,
            bounds.dimension(),
            n_particles,
        );
        let particles: Vec<SwarmParticle> = positions
            .into_iter()
            .zip(velocities)
            .enumerate()
            .map(|(i, (mut position, velocity))| {
                if !bounds.contains(&position) {
                    maybe_warn(&format!(
                        "start position of particle {i} lies outside the bounds and was clamped"
                    ));
                    bounds.clamp(&mut position);
                }
                SwarmParticle::new(
                    position,
                    velocity,
                    objective.as_ref(),
                    bounds,
                    config.penalty_coefficient(),
                )
            })
            .collect();
        let gbest = particles
            .iter()
            .map(SwarmParticle::best)
            .reduce(|best, candidate| {
                if candidate.improves_on(best) {
                    candidate
                } else {
                    best
                }
            })
            .cloned()
            .ok_or_else(|| SwarmError::config("swarm must contain at least one particle"))?;
        if gbest.fx.is_nan() {
            maybe_warn("every initial particle evaluated to NaN; waiting for a finite fitness");
        }
        Ok(Self {
            cost_evals: particles.len(),
            config,
            objective,
            rng,
            particles,
            gbest,
            iteration: 0,
        })
    }

    /// Move every particle once.
    ///
    /// Particles are processed in index order. With [`SwarmUpdateMethod::Asynchronous`] (the
    /// default) each particle is attracted to the global best as it stands when that particle is
    /// reached, and a strictly better personal best immediately replaces the global best, so later
    /// particles in the same pass already see it. With [`SwarmUpdateMethod::Synchronous`] the
    /// global best is frozen for the pass and updated afterwards.
    ///
    /// Random numbers are drawn in the same order in both modes.
    pub fn advance_iteration(&mut self) {
        match self.config.update_method() {
            SwarmUpdateMethod::Asynchronous => self.advance_asynchronous(),
            SwarmUpdateMethod::Synchronous => self.advance_synchronous(),
        }
        self.iteration += 1;
    }

    fn advance_asynchronous(&mut self) {
        let (omega, c1, c2) = (self.config.omega(), self.config.c1(), self.config.c2());
        let coefficient = self.config.penalty_coefficient();
        let velocity_limit = self.config.velocity_limit();
        for particle in &mut self.particles {
            particle.update_velocity(&self.gbest.x, omega, c1, c2, &mut self.rng);
            if let Some(limit) = velocity_limit {
                particle.clamp_velocity(limit);
            }
            particle.update_position(self.objective.as_ref(), self.config.bounds(), coefficient);
            self.cost_evals += 1;
            if particle.best().improves_on(&self.gbest) {
                self.gbest = particle.best().clone();
            }
        }
    }

    fn advance_synchronous(&mut self) {
        let (omega, c1, c2) = (self.config.omega(), self.config.c1(), self.config.c2());
        let coefficient = self.config.penalty_coefficient();
        let velocity_limit = self.config.velocity_limit();
        let gbest = self.gbest.x.clone();
        for particle in &mut self.particles {
            particle.update_velocity(&gbest, omega, c1, c2, &mut self.rng);
            if let Some(limit) = velocity_limit {
                particle.clamp_velocity(limit);
            }
            particle.update_position(self.objective.as_ref(), self.config.bounds(), coefficient);
            self.cost_evals += 1;
        }
        for particle in &self.particles {
            if particle.best().improves_on(&self.gbest) {
                self.gbest = particle.best().clone();
            }
        }
    }

    /// A snapshot of every particle's current position, in particle order.
    pub fn positions(&self) -> Vec<DVector<Float>> {
        self.particles
            .iter()
            .map(|p| p.position().x.clone())
            .collect()
    }

    /// A copy of the global best position and its fitness.
    pub fn global_best(&self) -> (DVector<Float>, Float) {
        self.gbest.clone().destructure()
    }

    /// The global best as a [`Point`].
    pub const fn global_best_point(&self) -> &Point {
        &self.gbest
    }

    /// The particles, in update order.
    pub fn particles(&self) -> &[SwarmParticle] {
        &self.particles
    }

    /// The fitness the swarm assigns to `x` (objective value plus penalty).
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidDimension`] if `x` does not match the swarm's dimension.
    pub fn fitness(&self, x: &DVector<Float>) -> Result<Float, SwarmError> {
        SwarmError::check_dimension(self.dimension(), x.len())?;
        Ok(self
            .objective
            .fitness(x, self.config.bounds(), self.config.penalty_coefficient()))
    }

    /// The number of completed iterations.
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// The number of fitness evaluations so far, including the initial population.
    pub const fn cost_evals(&self) -> usize {
        self.cost_evals
    }

    /// The dimension of the search space.
    pub fn dimension(&self) -> usize {
        self.config.bounds().dimension()
    }

    /// The bounds of the search space.
    pub const fn bounds(&self) -> &Bounds {
        self.config.bounds()
    }

    /// The configuration the swarm was built from.
    pub const fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// The callbacks used when the caller has no stopping rule of their own: stop after
    /// [`MaxSteps::default`] iterations.
    pub fn default_callbacks() -> Callbacks {
        Callbacks::empty().with_terminator(MaxSteps::default())
    }

    /// Repeatedly call [`Swarm::advance_iteration`] until `callbacks` ask to stop or
    /// `abort_signal` is raised, then summarize the global best.
    ///
    /// The abort signal is checked before each iteration and the callbacks after each one, so
    /// at least one iteration runs unless the signal is already raised. Without a
    /// [`Terminator`] that eventually breaks, the loop only ends on abort.
    pub fn run<T: Terminator>(
        &mut self,
        mut callbacks: T,
        abort_signal: &dyn AbortSignal,
    ) -> SwarmSummary {
        let mut status = SwarmStatus::default();
        loop {
            if abort_signal.is_aborted() {
                status.update_message("Aborted");
                break;
            }
            self.advance_iteration();
            if callbacks
                .check_for_termination(self.iteration, self, &mut status)
                .is_break()
            {
                break;
            }
        }
        self.summarize(&status)
    }

    /// Summarize the current global best.
    pub fn summarize(&self, status: &SwarmStatus) -> SwarmSummary {
        SwarmSummary {
            bounds: self.config.bounds().clone(),
            parameter_names: None,
            message: status.message.clone(),
            x: self.gbest.x.iter().copied().collect(),
            fx: self.gbest.fx,
            cost_evals: self.cost_evals,
            iterations: self.iteration,
            n_particles: self.particles.len(),
            converged: status.converged,
        }
    }
}

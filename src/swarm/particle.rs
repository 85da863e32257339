use crate::{
    core::{utils::generate_random_vector, Bounds, Point},
    traits::Objective,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// A particle with a position, velocity, and best known position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwarmParticle {
    position: Point,
    velocity: DVector<Float>,
    best: Point,
}
impl SwarmParticle {
    /// Create a new particle at `position` (which should already lie inside `bounds`) and
    /// evaluate it. The personal best starts as a copy of the starting point.
    pub fn new(
        position: DVector<Float>,
        velocity: DVector<Float>,
        objective: &dyn Objective,
        bounds: &Bounds,
        penalty_coefficient: Float,
    ) -> Self {
        let position = Point::evaluated(position, objective, bounds, penalty_coefficient);
        Self {
            best: position.clone(),
            position,
            velocity,
        }
    }
    /// The current position and its fitness.
    pub const fn position(&self) -> &Point {
        &self.position
    }
    /// The current velocity.
    pub const fn velocity(&self) -> &DVector<Float> {
        &self.velocity
    }
    /// The best position this particle has visited.
    pub const fn best(&self) -> &Point {
        &self.best
    }
    /// Update the velocity as
    ///
    /// ```math
    /// v \leftarrow \omega v + c_1 r_1 \odot (p - x) + c_2 r_2 \odot (g - x)
    /// ```
    ///
    /// where $`r_1`$ and $`r_2`$ are fresh vectors of independent $`U[0, 1)`$ draws (all of
    /// $`r_1`$ is drawn before $`r_2`$), $`p`$ is the personal best and $`g`$ is
    /// `global_best`. The result is not clamped.
    pub fn update_velocity(
        &mut self,
        global_best: &DVector<Float>,
        omega: Float,
        c1: Float,
        c2: Float,
        rng: &mut Rng,
    ) {
        let dim = self.position.dimension();
        let rv1 = generate_random_vector(dim, 0.0, 1.0, rng);
        let rv2 = generate_random_vector(dim, 0.0, 1.0, rng);
        self.velocity = self.velocity.scale(omega)
            + rv1
                .component_mul(&(&self.best.x - &self.position.x))
                .scale(c1)
            + rv2
                .component_mul(&(global_best - &self.position.x))
                .scale(c2);
    }
    /// Clamp every velocity component to `[-limit, limit]`.
    pub fn clamp_velocity(&mut self, limit: Float) {
        self.velocity
            .iter_mut()
            .for_each(|v| *v = v.clamp(-limit, limit));
    }
    /// Move the particle by its velocity, clamp the result into `bounds`, and re-evaluate it.
    ///
    /// The personal best is replaced by a copy of the new position only if the new fitness is
    /// strictly lower. Returns `true` if that happened.
    pub fn update_position(
        &mut self,
        objective: &dyn Objective,
        bounds: &Bounds,
        penalty_coefficient: Float,
    ) -> bool {
        let mut new_position = &self.position.x + &self.velocity;
        bounds.clamp(&mut new_position);
        self.position = Point::evaluated(new_position, objective, bounds, penalty_coefficient);
        if self.position.improves_on(&self.best) {
            self.best = self.position.clone();
            true
        } else {
            false
        }
    }
}

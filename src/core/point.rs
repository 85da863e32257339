use crate::{core::Bounds, traits::Objective, DVector, Float};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A position in the search space together with its fitness.
///
/// Personal and global bests are stored as [`Point`]s. A [`Point`] owns its coordinates, so a
/// stored best never aliases a particle's live position.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the point's fitness (objective value plus penalty)
    pub fx: Float,
}
impl Point {
    /// Create a [`Point`] at `x` by evaluating its fitness.
    pub fn evaluated(
        x: DVector<Float>,
        objective: &dyn Objective,
        bounds: &Bounds,
        penalty_coefficient: Float,
    ) -> Self {
        let fx = objective.fitness(&x, bounds, penalty_coefficient);
        Self { x, fx }
    }
    /// Convert the [`Point`] into a position-fitness tuple.
    pub fn destructure(self) -> (DVector<Float>, Float) {
        (self.x, self.fx)
    }
    /// The number of coordinates.
    pub fn dimension(&self) -> usize {
        self.x.len()
    }
    /// Returns `true` if this point is strictly better (lower) than `other`.
    ///
    /// A `NaN` fitness never improves on anything, while any other value improves on a `NaN`.
    pub fn improves_on(&self, other: &Self) -> bool {
        self.fx < other.fx || (other.fx.is_nan() && !self.fx.is_nan())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?}, f(x): {}", self.x.as_slice(), self.fx)
    }
}

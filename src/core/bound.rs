use crate::{core::utils::SampleFloat, DVector, Float, SwarmError};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::Deref};

/// A closed interval `[lower, upper]` which confines one coordinate of the search space.
///
/// Particles are clamped into their [`Bound`] after every move, so both limits must be finite.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    lower: Float,
    upper: Float,
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
impl From<(Float, Float)> for Bound {
    fn from(value: (Float, Float)) -> Self {
        Self::new(value.0, value.1)
    }
}
impl From<&Self> for Bound {
    fn from(value: &Self) -> Self {
        *value
    }
}

impl Bound {
    /// Create a new [`Bound`]. The limits are checked by [`Bounds::validate`], not here.
    pub const fn new(lower: Float, upper: Float) -> Self {
        Self { lower, upper }
    }
    /// Returns the lower limit.
    pub const fn lower(&self) -> Float {
        self.lower
    }
    /// Returns the upper limit.
    pub const fn upper(&self) -> Float {
        self.upper
    }
    /// Returns `upper - lower`.
    pub fn width(&self) -> Float {
        self.upper - self.lower
    }
    /// Get a value in the uniform distribution between `lower` and `upper`.
    ///
    /// A degenerate bound (`lower == upper`) always yields `lower`.
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        if self.lower < self.upper {
            rng.range(self.lower, self.upper)
        } else {
            self.lower
        }
    }
    /// Checks whether the given `value` lies inside the bound (edges included).
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Returns `0.0` if `value` is inside the bound, and the signed distance to the violated
    /// limit otherwise (negative below `lower`, positive above `upper`).
    pub fn bound_excess(&self, value: Float) -> Float {
        if value < self.lower {
            value - self.lower
        } else if value > self.upper {
            value - self.upper
        } else {
            0.0
        }
    }
    /// Moves `value` onto the nearest limit if it lies outside the bound. `NaN` is left as is.
    pub fn clamp(&self, value: Float) -> Float {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }
    /// Checks if the given value is equal to one of the limits.
    pub fn at_bound(&self, value: Float) -> bool {
        value == self.lower || value == self.upper
    }
}

/// The per-dimension [`Bound`]s of a search space.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// The dimension of the search space.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    /// Checks that there is at least one dimension and that every [`Bound`] is finite with
    /// `lower <= upper`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] describing the first offending bound.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.0.is_empty() {
            return Err(SwarmError::config("bounds must cover at least one dimension"));
        }
        for (i, b) in self.0.iter().enumerate() {
            if !(b.lower.is_finite() && b.upper.is_finite()) {
                return Err(SwarmError::config(format!(
                    "bound {i} {b} must have finite limits"
                )));
            }
            if b.lower > b.upper {
                return Err(SwarmError::config(format!(
                    "bound {i} {b} has its lower limit above its upper limit"
                )));
            }
        }
        Ok(())
    }
    /// Draw a vector uniformly distributed inside the box.
    pub fn random_vector_in(&self, rng: &mut Rng) -> DVector<Float> {
        DVector::from_iterator(self.0.len(), self.0.iter().map(|b| b.get_uniform(rng)))
    }
    /// Checks whether every coordinate of `x` lies inside its bound.
    pub fn contains(&self, x: &DVector<Float>) -> bool {
        x.iter().zip(&self.0).all(|(v, b)| b.contains(*v))
    }
    /// Clamp every coordinate of `x` into its bound in place.
    pub fn clamp(&self, x: &mut DVector<Float>) {
        x.iter_mut()
            .zip(&self.0)
            .for_each(|(v, b)| *v = b.clamp(*v));
    }
    /// The componentwise [`Bound::bound_excess`] of `x`.
    pub fn excess_from(&self, x: &DVector<Float>) -> DVector<Float> {
        DVector::from_iterator(
            x.len(),
            x.iter().zip(&self.0).map(|(v, b)| b.bound_excess(*v)),
        )
    }
    /// The squared euclidean distance from `x` to the box, zero on and inside its faces.
    pub fn squared_excess(&self, x: &DVector<Float>) -> Float {
        self.excess_from(x).norm_squared()
    }
}

impl From<Vec<Bound>> for Bounds {
    fn from(value: Vec<Bound>) -> Self {
        Self(value)
    }
}
impl From<Vec<(Float, Float)>> for Bounds {
    fn from(value: Vec<(Float, Float)>) -> Self {
        Self(value.into_iter().map(Bound::from).collect())
    }
}
impl<const N: usize> From<[(Float, Float); N]> for Bounds {
    fn from(value: [(Float, Float); N]) -> Self {
        Self(value.into_iter().map(Bound::from).collect())
    }
}

impl Deref for Bounds {
    type Target = Vec<Bound>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

use crate::{traits::Objective, DVector, Float};

/// The quadratic bowl (paraboloid), a convex function with a single minimum at the origin.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^n x_i^2
/// ```
/// This function has a minimum at $`f(\vec{0}) = 0`$ and accepts any dimension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bowl;
impl Objective for Bowl {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        x.iter().map(|xi| xi.powi(2)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_bowl() {
        assert_eq!(Bowl.evaluate(&dvector![0.0, 0.0]), 0.0);
        assert_eq!(Bowl.evaluate(&dvector![5.0]), 25.0);
        assert_eq!(Bowl.evaluate(&dvector![3.0, -4.0]), 25.0);
        assert_eq!(Bowl.dimension(), None);
    }
}

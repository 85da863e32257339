use crate::{traits::Objective, DVector, Float, PI};

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^n (x_i^2 - 10cos(2\pi x_i))
/// ```
/// This function has a minimum at $`f(\vec{0}) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;
impl Objective for Rastrigin {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        #[allow(clippy::suboptimal_flops)]
        let value = 10.0 * x.len() as Float
            + x.iter()
                .map(|xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
                .sum::<Float>();
        value
    }
}

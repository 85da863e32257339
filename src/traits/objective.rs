use dyn_clone::DynClone;

use crate::{core::Bounds, DVector, Float};

/// A trait which describes a test surface $`f(\mathbb{R}^n) \to \mathbb{R}`$ for a
/// [`Swarm`](`crate::swarm::Swarm`) to minimize.
///
/// Only [`Objective::evaluate`] is required. The swarm ranks positions by their
/// [`fitness`](`Objective::fitness`), the value plus a [`penalty`](`Objective::penalty`) for leaving
/// the search box. Implementations must be pure: evaluating the same position twice gives the
/// same value.
///
/// Closures of the form `Fn(&DVector<Float>) -> Float + Clone` implement this trait directly.
///
/// ```rust
/// use swarmfit::{core::Bounds, traits::Objective, DVector, Float};
///
/// #[derive(Clone)]
/// struct Sphere;
/// impl Objective for Sphere {
///     fn evaluate(&self, x: &DVector<Float>) -> Float {
///         x.norm_squared()
///     }
/// }
///
/// let bounds = Bounds::from(vec![(-1.0, 1.0); 2]);
/// let x = DVector::from_vec(vec![2.0, 0.0]);
/// assert_eq!(Sphere.evaluate(&x), 4.0);
/// assert_eq!(Sphere.fitness(&x, &bounds, 10.0), 4.0 + 10.0);
/// ```
pub trait Objective: DynClone {
    /// The value of the function at `x`.
    fn evaluate(&self, x: &DVector<Float>) -> Float;

    /// A non-negative cost for `x` lying outside `bounds`, scaled by `coefficient`.
    ///
    /// The default is the squared distance to the box,
    ///
    /// ```math
    /// c \sum_i \left[\max(0, x_i - x_{\text{max},i})^2 + \max(0, x_{\text{min},i} - x_i)^2\right]
    /// ```
    ///
    /// which is exactly zero inside the box and on its faces.
    fn penalty(&self, x: &DVector<Float>, bounds: &Bounds, coefficient: Float) -> Float {
        let excess = bounds.squared_excess(x);
        if excess > 0.0 {
            coefficient * excess
        } else {
            0.0
        }
    }

    /// The quantity minimized by the swarm, [`evaluate`](`Objective::evaluate`) plus
    /// [`penalty`](`Objective::penalty`).
    fn fitness(&self, x: &DVector<Float>, bounds: &Bounds, coefficient: Float) -> Float {
        self.evaluate(x) + self.penalty(x, bounds, coefficient)
    }

    /// The number of inputs the function requires, or `None` if it accepts any dimension.
    fn dimension(&self) -> Option<usize> {
        None
    }
}
dyn_clone::clone_trait_object!(Objective);

impl<F> Objective for F
where
    F: Fn(&DVector<Float>) -> Float + Clone,
{
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[derive(Clone)]
    struct Plane {
        n: usize,
    }
    impl Objective for Plane {
        fn evaluate(&self, x: &DVector<Float>) -> Float {
            x.sum()
        }
        fn dimension(&self) -> Option<usize> {
            Some(self.n)
        }
    }

    #[test]
    fn test_default_penalty_is_zero_inside_and_on_edges() {
        let bounds = Bounds::from(vec![(-10.0, 10.0); 2]);
        let f = Plane { n: 2 };
        assert_eq!(f.penalty(&dvector![0.0, 3.0], &bounds, 10000.0), 0.0);
        assert_eq!(f.penalty(&dvector![10.0, -10.0], &bounds, 10000.0), 0.0);
        assert_eq!(f.fitness(&dvector![10.0, -10.0], &bounds, 10000.0), 0.0);
    }

    #[test]
    fn test_default_penalty_outside() {
        let bounds = Bounds::from(vec![(-10.0, 10.0); 2]);
        let f = Plane { n: 2 };
        assert_eq!(f.penalty(&dvector![12.0, -13.0], &bounds, 2.0), 2.0 * (4.0 + 9.0));
        assert_eq!(f.penalty(&dvector![12.0, 0.0], &bounds, 0.0), 0.0);
        assert_eq!(f.fitness(&dvector![11.0, 0.0], &bounds, 100.0), 11.0 + 100.0);
    }

    #[test]
    fn test_penalty_grows_with_distance() {
        let bounds = Bounds::from(vec![(0.0, 1.0)]);
        let f = Plane { n: 1 };
        let mut last = 0.0;
        for i in 1..20 {
            let p = f.penalty(&dvector![1.0 + i as Float * 0.5], &bounds, 10000.0);
            assert!(p > last);
            last = p;
        }
    }

    #[test]
    fn test_closure_objective_and_boxed_clone() {
        let f = |x: &DVector<Float>| x[0].abs();
        assert_eq!(f.evaluate(&dvector![-3.0]), 3.0);
        assert_eq!(Objective::dimension(&f), None);
        let boxed: Box<dyn Objective> = Box::new(Plane { n: 3 });
        let cloned = boxed.clone();
        assert_eq!(cloned.dimension(), Some(3));
        assert_eq!(cloned.evaluate(&dvector![1.0, 2.0, 3.0]), 6.0);
    }
}

use crate::{traits::Objective, DVector, Float};

/// Per-dimension constant which lifts the Schwefel minimum to (approximately) zero.
pub const SCHWEFEL_SHIFT: Float = 418.9829;

/// The Schwefel function, a multimodal function whose global minimum sits far from the next best
/// local minima, close to the edge of the usual `[-500, 500]` search box.
///
/// ```math
/// f(\vec{x}) = -\sum_{i=1}^n x_i \sin\left(\sqrt{|x_i|}\right)
/// ```
/// The minimum is at $`x_i \approx 420.9687`$ with $`f \approx -418.9829\,n`$. The
/// [`Schwefel::shifted`] form adds $`418.9829\,n`$ so the minimum is close to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Schwefel {
    shifted: bool,
}
impl Schwefel {
    /// The unshifted form.
    pub const fn new() -> Self {
        Self { shifted: false }
    }
    /// The form with the $`418.9829\,n`$ offset.
    pub const fn shifted() -> Self {
        Self { shifted: true }
    }
    /// The location of the global minimum along every axis.
    pub const MINIMIZER: Float = 420.968_746;
}
impl Objective for Schwefel {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        let value = -x
            .iter()
            .map(|xi| xi * Float::sin(Float::sqrt(xi.abs())))
            .sum::<Float>();
        if self.shifted {
            SCHWEFEL_SHIFT * x.len() as Float + value
        } else {
            value
        }
    }
}

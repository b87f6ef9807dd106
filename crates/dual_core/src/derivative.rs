//! Scalar derivatives of closures over `Dual`.
//!
//! The closure is evaluated once per point with the input seeded as the
//! differentiation variable; the real part of the result is the function value and
//! the dual part its derivative.

use crate::dual::Dual;
use crate::error::DualResult;
use serde::{Deserialize, Serialize};

/// Function value and first derivative at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: f64,
    pub derivative: f64,
}

impl From<Dual> for Evaluation {
    fn from(d: Dual) -> Self {
        Self {
            value: d.real,
            derivative: d.dual,
        }
    }
}

/// Evaluates `f` at `x` and returns `f(x)` together with `f'(x)`.
pub fn derivative<F>(f: F, x: f64) -> DualResult<Evaluation>
where
    F: Fn(Dual) -> DualResult<Dual>,
{
    directional(f, x, 1.0)
}

/// Like [`derivative`], but seeds the dual part with `seed`, so the returned
/// derivative is `seed · f'(x)`.
pub fn directional<F>(f: F, x: f64, seed: f64) -> DualResult<Evaluation>
where
    F: Fn(Dual) -> DualResult<Dual>,
{
    f(Dual::new(x, seed)).map(Evaluation::from)
}

/// Evaluates `f` at every point in `xs`, stopping at the first failure.
pub fn derivative_at_points<F>(f: F, xs: &[f64]) -> DualResult<Vec<Evaluation>>
where
    F: Fn(Dual) -> DualResult<Dual>,
{
    xs.iter().map(|&x| derivative(&f, x)).collect()
}

#[cfg(test)]
mod tests {
    use super::{derivative, derivative_at_points, directional, Evaluation};
    use crate::dual::Dual;
    use crate::error::DualError;

    #[test]
    fn polynomial_value_and_slope() {
        let eval = derivative(|x| Ok(x * x + 3.0 * x + 5.0), 2.0).expect("derivative");
        assert_eq!(
            eval,
            Evaluation {
                value: 15.0,
                derivative: 7.0
            }
        );
    }

    #[test]
    fn composed_transcendentals() {
        // d/dx log(x) * sin(x) = sin(x)/x + log(x) cos(x)
        let x = 1.3_f64;
        let eval = derivative(|d| Ok(d.log()? * d.sin()), x).expect("derivative");
        assert!((eval.value - x.ln() * x.sin()).abs() < 1e-12);
        assert!((eval.derivative - (x.sin() / x + x.ln() * x.cos())).abs() < 1e-12);
    }

    #[test]
    fn directional_scales_by_seed() {
        let eval = directional(|d| d.pow(3), 2.0, 0.5).expect("directional");
        assert_eq!(eval.value, 8.0);
        assert_eq!(eval.derivative, 6.0);
    }

    #[test]
    fn at_points_stops_on_first_error() {
        let evals = derivative_at_points(|d| Ok(d.exp()), &[0.0, 1.0]).expect("points");
        assert_eq!(evals.len(), 2);
        assert_eq!(evals[0], Evaluation::from(Dual::new(1.0, 1.0)));

        let result = derivative_at_points(|d| d.log(), &[1.0, -1.0, 2.0]);
        assert!(matches!(
            result,
            Err(DualError::Domain {
                function: "log",
                ..
            })
        ));
    }
}

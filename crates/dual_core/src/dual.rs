use crate::error::{DualError, DualResult};
use num_traits::{One, Pow, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::{Product, Sum};

/// `tan` is rejected when `|cos(real)|` falls below this bound.
pub const TAN_POLE_TOLERANCE: f64 = 1e-12;

/// Dual number for forward-mode AD.
/// real: function value
/// dual: derivative with respect to the seeded variable
///
/// Equality is exact on both parts, so NaN never compares equal to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dual {
    pub real: f64,
    pub dual: f64,
}

impl Dual {
    pub fn new(real: f64, dual: f64) -> Self {
        Self { real, dual }
    }

    /// A value that does not depend on the differentiation variable.
    pub fn constant(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// The differentiation variable itself (dual part seeded to 1).
    pub fn variable(real: f64) -> Self {
        Self::new(real, 1.0)
    }

    pub fn sin(self) -> Self {
        Self::new(self.real.sin(), self.dual * self.real.cos())
    }

    pub fn cos(self) -> Self {
        Self::new(self.real.cos(), -self.dual * self.real.sin())
    }

    /// Fails near a pole, where `cos(real)` is within [`TAN_POLE_TOLERANCE`] of zero.
    pub fn tan(self) -> DualResult<Self> {
        let c = self.real.cos();
        if c.abs() < TAN_POLE_TOLERANCE {
            return Err(DualError::Domain {
                function: "tan",
                real: self.real,
            });
        }
        Ok(Self::new(self.real.tan(), self.dual / (c * c)))
    }

    pub fn exp(self) -> Self {
        let e = self.real.exp();
        Self::new(e, self.dual * e)
    }

    /// Natural logarithm. Fails when the real part is not positive.
    pub fn log(self) -> DualResult<Self> {
        if self.real <= 0.0 {
            return Err(DualError::Domain {
                function: "log",
                real: self.real,
            });
        }
        Ok(Self::new(self.real.ln(), self.dual / self.real))
    }

    /// `1/x`, i.e. `(1/a) - (b/a²)ε`.
    pub fn inverse(self) -> DualResult<Self> {
        if self.real == 0.0 {
            return Err(DualError::DivisionUndefined {
                operation: "inverse",
            });
        }
        let inv = 1.0 / self.real;
        Ok(Self::new(inv, -self.dual * inv * inv))
    }

    /// Quotient rule. Only the divisor's real part decides whether division is defined.
    pub fn try_div(self, rhs: Self) -> DualResult<Self> {
        if rhs.real == 0.0 {
            return Err(DualError::DivisionUndefined {
                operation: "division by a dual number",
            });
        }
        let denom = rhs.real * rhs.real;
        Ok(Self::new(
            self.real / rhs.real,
            (self.dual * rhs.real - self.real * rhs.dual) / denom,
        ))
    }

    pub fn try_div_scalar(self, rhs: f64) -> DualResult<Self> {
        if rhs == 0.0 {
            return Err(DualError::DivisionUndefined {
                operation: "division by a scalar",
            });
        }
        Ok(Self::new(self.real / rhs, self.dual / rhs))
    }

    /// `lhs / self` for a scalar dividend.
    pub fn try_rdiv(self, lhs: f64) -> DualResult<Self> {
        if self.real == 0.0 {
            return Err(DualError::DivisionUndefined {
                operation: "scalar divided by a dual number",
            });
        }
        Ok(Self::new(
            lhs / self.real,
            -lhs * self.dual / (self.real * self.real),
        ))
    }

    /// In-place quotient rule. Both parts are computed from the values held before the
    /// call, and the receiver is left unchanged on error.
    pub fn try_div_assign(&mut self, rhs: Self) -> DualResult<()> {
        if rhs.real == 0.0 {
            return Err(DualError::DivisionUndefined {
                operation: "division by a dual number",
            });
        }
        let Self { real, dual } = *self;
        let denom = rhs.real * rhs.real;
        self.real = real / rhs.real;
        self.dual = (dual * rhs.real - real * rhs.dual) / denom;
        Ok(())
    }

    pub fn try_div_assign_scalar(&mut self, rhs: f64) -> DualResult<()> {
        if rhs == 0.0 {
            return Err(DualError::DivisionUndefined {
                operation: "division by a scalar",
            });
        }
        self.real /= rhs;
        self.dual /= rhs;
        Ok(())
    }

    /// Power rule for an integer exponent.
    pub fn powi(self, n: i32) -> DualResult<Self> {
        let (real, dual) = power_parts(self.real, self.dual, n)?;
        Ok(Self::new(real, dual))
    }

    /// Integer power. Real exponents are accepted only when they hold an integral
    /// value; dual exponents are always rejected.
    pub fn pow(self, exponent: impl Into<Exponent>) -> DualResult<Self> {
        self.powi(exponent.into().to_integer()?)
    }

    /// In-place integer power. The exponent is validated before the receiver is touched.
    pub fn pow_assign(&mut self, exponent: impl Into<Exponent>) -> DualResult<()> {
        let n = exponent.into().to_integer()?;
        let Self { real, dual } = *self;
        let (new_real, new_dual) = power_parts(real, dual, n)?;
        self.real = new_real;
        self.dual = new_dual;
        Ok(())
    }
}

fn power_parts(real: f64, dual: f64, n: i32) -> DualResult<(f64, f64)> {
    if n == 0 {
        return Ok((1.0, 0.0));
    }
    if real == 0.0 && n < 0 {
        return Err(DualError::DivisionUndefined {
            operation: "negative integer power",
        });
    }
    // n - 1 overflows at i32::MIN; real is non-zero there, so divide once instead.
    let lowered = match n.checked_sub(1) {
        Some(m) => real.powi(m),
        None => real.powi(n) / real,
    };
    let derivative = f64::from(n) * lowered;
    Ok((real.powi(n), derivative * dual))
}

/// Exponent accepted by [`Dual::pow`] and [`Dual::pow_assign`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Integer(i32),
    Real(f64),
    Dual(Dual),
}

impl Exponent {
    pub fn to_integer(self) -> DualResult<i32> {
        match self {
            Exponent::Integer(n) => Ok(n),
            Exponent::Real(x) => {
                if x.fract() == 0.0 && x >= f64::from(i32::MIN) && x <= f64::from(i32::MAX) {
                    Ok(x as i32)
                } else {
                    Err(DualError::InvalidExponent(format!(
                        "{x:?} is not an integer"
                    )))
                }
            }
            Exponent::Dual(d) => Err(DualError::InvalidExponent(format!(
                "exponentiation by the dual number {d} is unsupported"
            ))),
        }
    }
}

impl From<i32> for Exponent {
    fn from(n: i32) -> Self {
        Exponent::Integer(n)
    }
}

impl From<f64> for Exponent {
    fn from(x: f64) -> Self {
        Exponent::Real(x)
    }
}

impl From<Dual> for Exponent {
    fn from(d: Dual) -> Self {
        Exponent::Dual(d)
    }
}

impl From<f64> for Dual {
    fn from(real: f64) -> Self {
        Self::constant(real)
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dual(real={:?}, dual={:?})", self.real, self.dual)
    }
}

impl PartialEq<f64> for Dual {
    fn eq(&self, other: &f64) -> bool {
        self.real == *other && self.dual == 0.0
    }
}

impl PartialEq<Dual> for f64 {
    fn eq(&self, other: &Dual) -> bool {
        other == self
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.dual == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Pow<i32> for Dual {
    type Output = DualResult<Dual>;
    fn pow(self, rhs: i32) -> Self::Output {
        self.powi(rhs)
    }
}

impl Sum for Dual {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for Dual {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

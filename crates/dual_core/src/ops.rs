//! Operator overloads for `Dual`.
//!
//! A bare `f64` on either side of an operator is treated as a constant, i.e.
//! `Dual::new(scalar, 0.0)`. Division panics on a zero divisor the same way integer
//! division does; use [`Dual::try_div`] and friends to get a `DualError` instead.

use crate::dual::Dual;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for Dual {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl Add<f64> for Dual {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.real + rhs, self.dual)
    }
}

impl Add<Dual> for f64 {
    type Output = Dual;
    fn add(self, rhs: Dual) -> Dual {
        rhs + self
    }
}

impl Sub for Dual {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl Sub<f64> for Dual {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.real - rhs, self.dual)
    }
}

impl Sub<Dual> for f64 {
    type Output = Dual;
    fn sub(self, rhs: Dual) -> Dual {
        Dual::new(self - rhs.real, -rhs.dual)
    }
}

impl Mul for Dual {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl Mul<f64> for Dual {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.real * rhs, self.dual * rhs)
    }
}

impl Mul<Dual> for f64 {
    type Output = Dual;
    fn mul(self, rhs: Dual) -> Dual {
        rhs * self
    }
}

/// # Panics
/// If the divisor's real part is zero.
impl Div for Dual {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.try_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// # Panics
/// If the divisor is zero.
impl Div<f64> for Dual {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.try_div_scalar(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// # Panics
/// If the divisor's real part is zero.
impl Div<Dual> for f64 {
    type Output = Dual;
    fn div(self, rhs: Dual) -> Dual {
        rhs.try_rdiv(self).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Neg for Dual {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.real, -self.dual)
    }
}

impl AddAssign for Dual {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.dual += rhs.dual;
    }
}

impl AddAssign<f64> for Dual {
    fn add_assign(&mut self, rhs: f64) {
        self.real += rhs;
    }
}

impl SubAssign for Dual {
    fn sub_assign(&mut self, rhs: Self) {
        self.real -= rhs.real;
        self.dual -= rhs.dual;
    }
}

impl SubAssign<f64> for Dual {
    fn sub_assign(&mut self, rhs: f64) {
        self.real -= rhs;
    }
}

impl MulAssign for Dual {
    fn mul_assign(&mut self, rhs: Self) {
        // The new dual part needs the old real part.
        let Self { real, dual } = *self;
        self.real = real * rhs.real;
        self.dual = real * rhs.dual + dual * rhs.real;
    }
}

impl MulAssign<f64> for Dual {
    fn mul_assign(&mut self, rhs: f64) {
        self.real *= rhs;
        self.dual *= rhs;
    }
}

/// # Panics
/// If the divisor's real part is zero.
impl DivAssign for Dual {
    fn div_assign(&mut self, rhs: Self) {
        self.try_div_assign(rhs).unwrap_or_else(|err| panic!("{err}"));
    }
}

/// # Panics
/// If the divisor is zero.
impl DivAssign<f64> for Dual {
    fn div_assign(&mut self, rhs: f64) {
        self.try_div_assign_scalar(rhs).unwrap_or_else(|err| panic!("{err}"));
    }
}

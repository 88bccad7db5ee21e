//! Measure type and its implementations.

use crate::arithmetic::{self, Factor};
use crate::error::{Error, Result};
use crate::{Quantity, Unit, UnitMeasure};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use std::fmt::{self, Display, Formatter};

/// An amount of quantity `Q`.
///
/// `Measure<Q>` wraps an `f64` that is always expressed in `Q`'s reference unit, together with
/// phantom type information about the quantity. Constructing a measure from another unit converts
/// immediately and forgets that unit; use [`Measure::convert_to`] to get a
/// [`UnitMeasure`] that remembers a display unit.
///
/// Equality and ordering compare reference amounts exactly. Use [`Measure::approx_eq`] for a
/// tolerance-based comparison.
///
/// # Examples
///
/// ```rust
/// use metron_core::Measure;
/// use metron_core::length::{Length, CENTIMETER, METER};
///
/// let a = Measure::<Length>::in_unit(5.0, &METER);
/// let b = Measure::<Length>::in_unit(5.0, &CENTIMETER);
/// let sum = a + b;
/// assert!((sum.amount_in(&METER) - 5.05).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Measure<Q: Quantity>(f64, PhantomData<Q>);

impl<Q: Quantity> Measure<Q> {
    /// A measure whose amount is `NaN`.
    pub const NAN: Self = Self::new(f64::NAN);

    /// A zero measure.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a measure from an amount already expressed in the reference unit.
    ///
    /// ```rust
    /// use metron_core::Measure;
    /// use metron_core::mass::Mass;
    /// let m = Measure::<Mass>::new(3.0);
    /// assert_eq!(m.amount(), 3.0);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Self(amount, PhantomData)
    }

    /// Creates a measure from an amount expressed in `unit`.
    ///
    /// The unit is expected to belong to `Q`; that is not checked here. Symbol-based construction
    /// through the [`UnitRegistry`](crate::UnitRegistry) does check it.
    ///
    /// ```rust
    /// use metron_core::Measure;
    /// use metron_core::temperature::{Temperature, CELSIUS};
    /// let t = Measure::<Temperature>::in_unit(0.0, &CELSIUS);
    /// assert_eq!(t.amount(), 273.15);
    /// ```
    #[inline]
    pub fn in_unit(amount: f64, unit: &Unit) -> Self {
        Self::new(unit.to_reference(amount))
    }

    /// The amount in the reference unit.
    #[inline]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// The amount expressed in `unit`.
    ///
    /// ```rust
    /// use metron_core::Measure;
    /// use metron_core::length::{Length, KILOMETER};
    /// let d = Measure::<Length>::new(1500.0);
    /// assert_eq!(d.amount_in(&KILOMETER), 1.5);
    /// ```
    #[inline]
    pub fn amount_in(self, unit: &Unit) -> f64 {
        unit.from_reference(self.0)
    }

    /// A unit-preserving copy of this measure, displayed in `unit`.
    #[inline]
    pub fn convert_to(self, unit: Unit) -> UnitMeasure<Q> {
        UnitMeasure::from_reference(self.0, unit)
    }

    /// The absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// The smaller of two measures.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// The larger of two measures.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// `true` when the reference amounts differ by at most `tolerance`.
    ///
    /// This is the tolerance-based counterpart of `==`, which compares exactly.
    ///
    /// ```rust
    /// use metron_core::Measure;
    /// use metron_core::temperature::{Temperature, CELSIUS, KELVIN};
    /// let a = Measure::<Temperature>::in_unit(293.15, &KELVIN);
    /// let b = Measure::<Temperature>::in_unit(20.0, &CELSIUS);
    /// assert!(a.approx_eq(b, Measure::new(1e-9)));
    /// ```
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        (self.0 - other.0).abs() <= tolerance.0.abs()
    }

    /// Reinterprets this measure as quantity `T`.
    ///
    /// Succeeds when both quantities have the same base exponents. The dimensionless
    /// differentiator is *ignored* here, unlike in every other dimension check, so a plane angle
    /// can be cast to a plain number. Fails with [`Error::DimensionMismatch`] otherwise.
    ///
    /// ```rust
    /// use metron_core::Measure;
    /// use metron_core::angle::PlaneAngle;
    /// use metron_core::dimensionless::Number;
    /// use metron_core::time::Time;
    ///
    /// let a = Measure::<PlaneAngle>::new(0.5);
    /// let n: Measure<Number> = a.cast().unwrap();
    /// assert_eq!(n.amount(), 0.5);
    /// assert!(a.cast::<Time>().is_err());
    /// ```
    pub fn cast<T: Quantity>(self) -> Result<Measure<T>> {
        let actual = Q::dimension();
        let expected = T::dimension();
        if !actual.same_base_dimension(&expected) {
            return Err(Error::DimensionMismatch {
                quantity: T::NAME,
                expected,
                actual,
            });
        }
        Ok(Measure::new(self.0))
    }

    /// `self × rhs`, claimed to be a measure of `R`. See [`arithmetic::times`].
    #[inline]
    pub fn times<R: Quantity, Q2: Quantity>(self, rhs: Measure<Q2>) -> Result<Measure<R>> {
        arithmetic::times::<R, Q, Q2>(self, rhs)
    }

    /// `self ÷ rhs`, claimed to be a measure of `R`. See [`arithmetic::divide`].
    #[inline]
    pub fn divide<R: Quantity, Q2: Quantity>(self, rhs: Measure<Q2>) -> Result<Measure<R>> {
        arithmetic::divide::<R, Q, Q2>(self, rhs)
    }

    /// `self^exponent`, claimed to be a measure of `R`. See [`arithmetic::power`].
    #[inline]
    pub fn powi<R: Quantity>(self, exponent: i32) -> Result<Measure<R>> {
        arithmetic::power::<R, Q>(self, exponent)
    }

    /// This measure as an operand of [`arithmetic::product`], raised to `exponent`.
    #[inline]
    pub fn raised(self, exponent: i32) -> Factor<Q> {
        Factor::new(self, exponent)
    }
}

impl<Q: Quantity> Default for Measure<Q> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> Add for Measure<Q> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<Q: Quantity> AddAssign for Measure<Q> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<Q: Quantity> Sub for Measure<Q> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<Q: Quantity> SubAssign for Measure<Q> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<Q: Quantity> Neg for Measure<Q> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<Q: Quantity> Mul<f64> for Measure<Q> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<Q: Quantity> Mul<Measure<Q>> for f64 {
    type Output = Measure<Q>;
    #[inline]
    fn mul(self, rhs: Measure<Q>) -> Self::Output {
        rhs * self
    }
}

impl<Q: Quantity> MulAssign<f64> for Measure<Q> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<Q: Quantity> Div<f64> for Measure<Q> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<Q: Quantity> DivAssign<f64> for Measure<Q> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

/// Dividing two measures of the same quantity yields a plain ratio of reference amounts.
impl<Q: Quantity> Div for Measure<Q> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<Q: Quantity> Sum for Measure<Q> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, Q: Quantity> Sum<&'a Measure<Q>> for Measure<Q> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<Q: Quantity> From<UnitMeasure<Q>> for Measure<Q> {
    #[inline]
    fn from(measure: UnitMeasure<Q>) -> Self {
        measure.measure()
    }
}

impl<Q: Quantity> Display for Measure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, Q::REFERENCE.symbol())
    }
}

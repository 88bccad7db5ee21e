//! Unit-preserving measures.

use crate::{Measure, Quantity, Unit};
use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};
use std::fmt::{self, Display, Formatter};

/// A [`Measure`] that remembers the unit it should be shown in.
///
/// The amount is still stored in the reference unit, so arithmetic and comparison behave exactly
/// like [`Measure`]; the display unit only affects [`UnitMeasure::display_amount`] and
/// formatting. Binary operators keep the display unit of the left operand.
///
/// ```rust
/// use metron_core::Measure;
/// use metron_core::length::{Length, CENTIMETER, METER};
///
/// let shown = Measure::<Length>::new(1.25).convert_to(CENTIMETER);
/// assert_eq!(shown.to_string(), "125 cm");
/// assert_eq!(shown, Measure::<Length>::new(1.25).convert_to(METER));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UnitMeasure<Q: Quantity> {
    measure: Measure<Q>,
    unit: Unit,
}

impl<Q: Quantity> UnitMeasure<Q> {
    /// Creates a measure from an amount expressed in `unit`, remembering `unit`.
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self {
            measure: Measure::in_unit(amount, &unit),
            unit,
        }
    }

    pub(crate) fn from_reference(amount: f64, unit: Unit) -> Self {
        Self {
            measure: Measure::new(amount),
            unit,
        }
    }

    /// The amount in the reference unit.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.measure.amount()
    }

    /// The amount in the remembered display unit.
    #[inline]
    pub fn display_amount(&self) -> f64 {
        self.unit.from_reference(self.measure.amount())
    }

    /// The amount in an arbitrary unit.
    #[inline]
    pub fn amount_in(&self, unit: &Unit) -> f64 {
        self.measure.amount_in(unit)
    }

    /// The remembered display unit.
    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The same amount, displayed in `unit`.
    #[inline]
    pub fn convert_to(&self, unit: Unit) -> Self {
        Self {
            measure: self.measure,
            unit,
        }
    }

    /// The plain measure, forgetting the display unit.
    #[inline]
    pub fn measure(&self) -> Measure<Q> {
        self.measure
    }

    /// Tolerance-based comparison of the reference amounts.
    #[inline]
    pub fn approx_eq(&self, other: &Self, tolerance: Measure<Q>) -> bool {
        self.measure.approx_eq(other.measure, tolerance)
    }

    fn with(&self, measure: Measure<Q>) -> Self {
        Self {
            measure,
            unit: self.unit,
        }
    }
}

impl<Q: Quantity> PartialEq for UnitMeasure<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.measure == other.measure
    }
}

impl<Q: Quantity> PartialOrd for UnitMeasure<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.measure.partial_cmp(&other.measure)
    }
}

impl<Q: Quantity> PartialEq<Measure<Q>> for UnitMeasure<Q> {
    fn eq(&self, other: &Measure<Q>) -> bool {
        self.measure == *other
    }
}

impl<Q: Quantity> Add for UnitMeasure<Q> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.with(self.measure + rhs.measure)
    }
}

impl<Q: Quantity> Add<Measure<Q>> for UnitMeasure<Q> {
    type Output = Self;
    fn add(self, rhs: Measure<Q>) -> Self {
        self.with(self.measure + rhs)
    }
}

impl<Q: Quantity> Sub for UnitMeasure<Q> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.with(self.measure - rhs.measure)
    }
}

impl<Q: Quantity> Sub<Measure<Q>> for UnitMeasure<Q> {
    type Output = Self;
    fn sub(self, rhs: Measure<Q>) -> Self {
        self.with(self.measure - rhs)
    }
}

impl<Q: Quantity> Neg for UnitMeasure<Q> {
    type Output = Self;
    fn neg(self) -> Self {
        self.with(-self.measure)
    }
}

impl<Q: Quantity> Mul<f64> for UnitMeasure<Q> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.with(self.measure * rhs)
    }
}

impl<Q: Quantity> core::ops::Div<f64> for UnitMeasure<Q> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.with(self.measure / rhs)
    }
}

impl<Q: Quantity> core::ops::Div for UnitMeasure<Q> {
    type Output = f64;
    fn div(self, rhs: Self) -> f64 {
        self.measure / rhs.measure
    }
}

impl<Q: Quantity> Display for UnitMeasure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_amount(), self.unit)
    }
}

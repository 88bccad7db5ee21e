//! Dimension-checked arithmetic across quantities.
//!
//! Every operation here takes the *claimed* result quantity as an explicit type parameter,
//! computes the dimension the operands actually produce, and refuses to build the result when
//! the two differ:
//!
//! ```rust
//! use metron_core::arithmetic::times;
//! use metron_core::area::Area;
//! use metron_core::length::Length;
//! use metron_core::volume::Volume;
//! use metron_core::{Error, Measure};
//!
//! let v = times::<Volume, _, _>(Measure::<Area>::new(2.0), Measure::<Length>::new(3.0)).unwrap();
//! assert_eq!(v, Measure::<Volume>::new(6.0));
//!
//! let err = times::<Volume, _, _>(Measure::<Area>::new(2.0), Measure::<Area>::new(3.0));
//! assert!(matches!(err, Err(Error::DimensionMismatch { .. })));
//! ```
//!
//! Amounts are combined in the reference units of the operands, so the result is already in the
//! reference unit of the claimed quantity whenever reference units are coherent (SI).

use crate::error::{Error, Result};
use crate::{Dimension, Measure, Quantity};
use log::debug;

fn ensure_dimension<Q: Quantity>(actual: Dimension) -> Result<()> {
    let expected = Q::dimension();
    if actual != expected {
        debug!(
            "rejected {} result: expected {}, operands produce {}",
            Q::NAME,
            expected,
            actual
        );
        return Err(Error::DimensionMismatch {
            quantity: Q::NAME,
            expected,
            actual,
        });
    }
    Ok(())
}

/// `lhs × rhs` as a measure of `Q`.
///
/// Fails with [`Error::DimensionMismatch`] unless `dim(Q1)·dim(Q2) == dim(Q)`.
pub fn times<Q, Q1, Q2>(lhs: Measure<Q1>, rhs: Measure<Q2>) -> Result<Measure<Q>>
where
    Q: Quantity,
    Q1: Quantity,
    Q2: Quantity,
{
    ensure_dimension::<Q>(Q1::dimension() * Q2::dimension())?;
    Ok(Measure::new(lhs.amount() * rhs.amount()))
}

/// `lhs ÷ rhs` as a measure of `Q`.
///
/// Fails with [`Error::DimensionMismatch`] unless `dim(Q1)/dim(Q2) == dim(Q)`.
pub fn divide<Q, Q1, Q2>(lhs: Measure<Q1>, rhs: Measure<Q2>) -> Result<Measure<Q>>
where
    Q: Quantity,
    Q1: Quantity,
    Q2: Quantity,
{
    ensure_dimension::<Q>(Q1::dimension() / Q2::dimension())?;
    Ok(Measure::new(lhs.amount() / rhs.amount()))
}

/// `base^exponent` as a measure of `Q`.
///
/// Fails with [`Error::DimensionMismatch`] unless `dim(Q1)^exponent == dim(Q)`. The amount is
/// raised in `f64`.
pub fn power<Q, Q1>(base: Measure<Q1>, exponent: i32) -> Result<Measure<Q>>
where
    Q: Quantity,
    Q1: Quantity,
{
    ensure_dimension::<Q>(Q1::dimension().power(exponent))?;
    Ok(Measure::new(base.amount().powi(exponent)))
}

/// A measure raised to an integer exponent, as an operand of [`product`].
///
/// Usually built with [`Measure::raised`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor<Q: Quantity> {
    measure: Measure<Q>,
    exponent: i32,
}

impl<Q: Quantity> Factor<Q> {
    /// `measure^exponent`.
    pub fn new(measure: Measure<Q>, exponent: i32) -> Self {
        Self { measure, exponent }
    }

    /// The measure being raised.
    pub fn measure(&self) -> Measure<Q> {
        self.measure
    }

    /// The exponent applied to the measure.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }
}

/// A set of [`Factor`]s that can be multiplied together.
///
/// Implemented for two- and three-element tuples of factors.
pub trait Operands {
    /// Combined dimension `Π dim(Qi)^ei`.
    fn dimension(&self) -> Dimension;
    /// Combined reference amount `Π amount_i^ei`.
    fn amount(&self) -> f64;
}

impl<Q: Quantity> Operands for Factor<Q> {
    fn dimension(&self) -> Dimension {
        Q::dimension().power(self.exponent)
    }

    fn amount(&self) -> f64 {
        self.measure.amount().powi(self.exponent)
    }
}

impl<Q1: Quantity, Q2: Quantity> Operands for (Factor<Q1>, Factor<Q2>) {
    fn dimension(&self) -> Dimension {
        self.0.dimension() * self.1.dimension()
    }

    fn amount(&self) -> f64 {
        self.0.amount() * self.1.amount()
    }
}

impl<Q1: Quantity, Q2: Quantity, Q3: Quantity> Operands for (Factor<Q1>, Factor<Q2>, Factor<Q3>) {
    fn dimension(&self) -> Dimension {
        self.0.dimension() * self.1.dimension() * self.2.dimension()
    }

    fn amount(&self) -> f64 {
        self.0.amount() * self.1.amount() * self.2.amount()
    }
}

/// Product of several measures, each raised to its own exponent, as a measure of `Q`.
///
/// Generalizes [`times`], [`divide`] and [`power`]:
///
/// ```rust
/// use metron_core::arithmetic::product;
/// use metron_core::mass::Mass;
/// use metron_core::mechanics::{Energy, Velocity};
/// use metron_core::Measure;
///
/// let m = Measure::<Mass>::new(2.0);
/// let v = Measure::<Velocity>::new(3.0);
/// let kinetic = product::<Energy, _>((m.raised(1), v.raised(2))).unwrap() * 0.5;
/// assert_eq!(kinetic.amount(), 9.0);
/// ```
pub fn product<Q, O>(operands: O) -> Result<Measure<Q>>
where
    Q: Quantity,
    O: Operands,
{
    ensure_dimension::<Q>(operands.dimension())?;
    Ok(Measure::new(operands.amount()))
}

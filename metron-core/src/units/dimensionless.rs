//! Dimensionless quantities.
//!
//! [`Number`] is the plain dimensionless quantity: differentiator `1`, the identity of dimension
//! algebra. Named ratios such as the refractive index or the relative density draw a prime
//! differentiator of their own, so they stay distinct from plain numbers, from angles and from
//! each other in every dimension check. [`Measure::cast`](crate::Measure::cast) ignores the
//! differentiator and is the explicit way to move between them.
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::dimensionless::{Number, RefractiveIndex, PERCENT};
//!
//! let share = Measure::<Number>::in_unit(12.5, &PERCENT);
//! assert_eq!(share.amount(), 0.125);
//!
//! let n = Measure::<RefractiveIndex>::new(1.33);
//! assert!(n.times::<Number, _>(share).is_err());
//! ```

use crate::{Dimension, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// A plain number (differentiator `1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::NONE, reference = ONE)]
pub enum Number {}

/// Refractive index (own differentiator).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimensionless = "RefractiveIndex", reference = REFRACTIVE_INDEX_UNIT)]
pub enum RefractiveIndex {}

/// Relative density, also known as specific gravity (own differentiator).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimensionless = "RelativeDensity", reference = SPECIFIC_GRAVITY)]
pub enum RelativeDensity {}

/// The unit number.
pub const ONE: Unit = Unit::reference("1");
/// Percent (`0.01`).
pub const PERCENT: Unit = Unit::multiplicative("%", 1e-2);

/// Refractive index unit.
pub const REFRACTIVE_INDEX_UNIT: Unit = Unit::reference("RIU");

/// Specific gravity.
pub const SPECIFIC_GRAVITY: Unit = Unit::reference("SG");

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .quantity::<Number>(&[PERCENT])
        .quantity::<RefractiveIndex>(&[])
        .quantity::<RelativeDensity>(&[])
}

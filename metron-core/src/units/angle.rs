//! Plane and solid angles.
//!
//! Angles are dimensionless, yet an angle must not be mistaken for a plain number or for any other
//! dimensionless ratio. The plane angle therefore draws its own prime *differentiator* from the
//! global registry, and the solid angle is defined as the plane angle squared, so that
//! `rad · rad` checks as `sr` while `rad · refractive index` checks as neither.
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::angle::{PlaneAngle, SolidAngle, DEGREE, RADIAN};
//!
//! let a = Measure::<PlaneAngle>::in_unit(180.0, &DEGREE);
//! assert!((a.amount_in(&RADIAN) - core::f64::consts::PI).abs() < 1e-12);
//!
//! let omega = a.times::<SolidAngle, _>(a).unwrap();
//! assert!((omega.amount() - core::f64::consts::PI.powi(2)).abs() < 1e-12);
//! ```

use crate::{Prefix, Quantity, RegistryBuilder, Unit};
use core::f64::consts::PI;
use metron_derive::Quantity;

/// Plane angle (dimensionless, own differentiator).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimensionless = "PlaneAngle", reference = RADIAN)]
pub enum PlaneAngle {}

/// Solid angle (plane angle squared).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = PlaneAngle::dimension().power(2), reference = STERADIAN)]
pub enum SolidAngle {}

/// Radian.
pub const RADIAN: Unit = Unit::reference("rad");
/// Milliradian.
pub const MILLIRADIAN: Unit = Unit::prefixed(Prefix::Milli, RADIAN);
/// Degree (`π/180 rad`).
pub const DEGREE: Unit = Unit::multiplicative("°", PI / 180.0);
/// Arcminute (`1/60 °`).
pub const ARCMINUTE: Unit = Unit::multiplicative("′", PI / 10_800.0);
/// Arcsecond (`1/3600 °`).
pub const ARCSECOND: Unit = Unit::multiplicative("″", PI / 648_000.0);

/// Steradian.
pub const STERADIAN: Unit = Unit::reference("sr");

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .quantity::<PlaneAngle>(&[MILLIRADIAN, DEGREE, ARCMINUTE, ARCSECOND])
        .quantity::<SolidAngle>(&[])
}

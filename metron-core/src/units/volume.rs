//! Volume.
//!
//! The reference unit is the cubic metre. The litre is defined relative to the cubic decimetre
//! and carries the prefix ladder used in practice (millilitre, centilitre, decilitre).
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::volume::{Volume, CUBIC_CENTIMETER, MILLILITER};
//!
//! let dose = Measure::<Volume>::in_unit(5.0, &MILLILITER);
//! assert!((dose.amount_in(&CUBIC_CENTIMETER) - 5.0).abs() < 1e-12);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Volume (`L³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::LENGTH.power(3), reference = CUBIC_METER)]
pub enum Volume {}

/// Cubic metre.
pub const CUBIC_METER: Unit = Unit::reference("m³");
/// Cubic decimetre (`1e-3 m³`).
pub const CUBIC_DECIMETER: Unit = Unit::multiplicative("dm³", 1e-3);
/// Cubic centimetre (`1e-6 m³`).
pub const CUBIC_CENTIMETER: Unit = Unit::multiplicative("cm³", 1e-6);
/// Cubic millimetre (`1e-9 m³`).
pub const CUBIC_MILLIMETER: Unit = Unit::multiplicative("mm³", 1e-9);

/// Litre (exactly `1 dm³`).
pub const LITER: Unit = Unit::scaled("l", 1.0, CUBIC_DECIMETER);
/// Millilitre.
pub const MILLILITER: Unit = Unit::prefixed(Prefix::Milli, LITER);
/// Centilitre.
pub const CENTILITER: Unit = Unit::prefixed(Prefix::Centi, LITER);
/// Decilitre.
pub const DECILITER: Unit = Unit::prefixed(Prefix::Deci, LITER);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<Volume>(&[
        CUBIC_DECIMETER,
        CUBIC_CENTIMETER,
        CUBIC_MILLIMETER,
        LITER,
        MILLILITER,
        CENTILITER,
        DECILITER,
    ])
}

//! Length.
//!
//! The reference unit is the metre. All other length units are expressed as exact ratios to
//! metres:
//!
//! - **SI ladder**: kilo-, hecto-, deca-, deci-, centi-, milli-, micro- and nanometre.
//! - **Imperial units**: the international inch is exactly `0.0254 m`; foot, yard and (statute)
//!   mile follow from it.
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::length::{Length, ASTRONOMICAL_UNIT, KILOMETER};
//!
//! let au = Measure::<Length>::in_unit(1.0, &ASTRONOMICAL_UNIT);
//! assert_eq!(au.amount_in(&KILOMETER), 149_597_870.7);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Length (`L`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::LENGTH, reference = METER)]
pub enum Length {}

// ─────────────────────────────────────────────────────────────────────────────
// SI units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
pub const METER: Unit = Unit::reference("m");
/// Kilometre (`1000 m`).
pub const KILOMETER: Unit = Unit::prefixed(Prefix::Kilo, METER);
/// Hectometre (`100 m`).
pub const HECTOMETER: Unit = Unit::prefixed(Prefix::Hecto, METER);
/// Decametre (`10 m`).
pub const DECAMETER: Unit = Unit::prefixed(Prefix::Deca, METER);
/// Decimetre (`0.1 m`).
pub const DECIMETER: Unit = Unit::prefixed(Prefix::Deci, METER);
/// Centimetre (`0.01 m`).
pub const CENTIMETER: Unit = Unit::prefixed(Prefix::Centi, METER);
/// Millimetre (`1e-3 m`).
pub const MILLIMETER: Unit = Unit::prefixed(Prefix::Milli, METER);
/// Micrometre (`1e-6 m`).
pub const MICROMETER: Unit = Unit::prefixed(Prefix::Micro, METER);
/// Nanometre (`1e-9 m`).
pub const NANOMETER: Unit = Unit::prefixed(Prefix::Nano, METER);

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and astronomical units
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (exactly `0.0254 m`).
pub const INCH: Unit = Unit::multiplicative("in", 0.0254);
/// International foot (exactly `0.3048 m`).
pub const FOOT: Unit = Unit::multiplicative("ft", 0.3048);
/// International yard (exactly `0.9144 m`).
pub const YARD: Unit = Unit::multiplicative("yd", 0.9144);
/// Statute mile (exactly `1609.344 m`).
pub const MILE: Unit = Unit::multiplicative("mi", 1_609.344);
/// Astronomical unit (exactly `149_597_870_700 m`).
pub const ASTRONOMICAL_UNIT: Unit = Unit::multiplicative("au", 149_597_870_700.0);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<Length>(&[
        KILOMETER,
        HECTOMETER,
        DECAMETER,
        DECIMETER,
        CENTIMETER,
        MILLIMETER,
        MICROMETER,
        NANOMETER,
        INCH,
        FOOT,
        YARD,
        MILE,
        ASTRONOMICAL_UNIT,
    ])
}

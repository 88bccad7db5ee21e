//! Mass.
//!
//! The reference unit is the kilogram, the SI base unit. The gram carries the prefix ladder, so
//! the milligram and microgram are prefixed grams rather than prefixed kilograms.
//!
//! The avoirdupois pound is exactly `0.453_592_37 kg`; the ounce is one sixteenth of it.
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::mass::{Mass, GRAM, TONNE};
//!
//! let m = Measure::<Mass>::in_unit(2.5, &TONNE);
//! assert_eq!(m.amount(), 2500.0);
//! assert_eq!(m.amount_in(&GRAM), 2_500_000.0);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Mass (`M`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::MASS, reference = KILOGRAM)]
pub enum Mass {}

/// Kilogram (SI base unit).
pub const KILOGRAM: Unit = Unit::reference("kg");
/// Gram (`1e-3 kg`).
pub const GRAM: Unit = Unit::multiplicative("g", 1e-3);
/// Milligram (`1e-6 kg`).
pub const MILLIGRAM: Unit = Unit::prefixed(Prefix::Milli, GRAM);
/// Microgram (`1e-9 kg`).
pub const MICROGRAM: Unit = Unit::prefixed(Prefix::Micro, GRAM);
/// Metric tonne (`1000 kg`).
pub const TONNE: Unit = Unit::multiplicative("t", 1e3);
/// Avoirdupois pound (exactly `0.45359237 kg`).
pub const POUND: Unit = Unit::multiplicative("lb", 0.453_592_37);
/// Avoirdupois ounce (exactly `1/16 lb`).
pub const OUNCE: Unit = Unit::multiplicative("oz", 0.028_349_523_125);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<Mass>(&[GRAM, MILLIGRAM, MICROGRAM, TONNE, POUND, OUNCE])
}

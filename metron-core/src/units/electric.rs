//! Electric current, charge and voltage.
//!
//! The ampere is the SI base unit; the coulomb (`A·s`) and volt (`kg·m²·s⁻³·A⁻¹`) are coherent
//! derived units. The milliampere-hour is the battery-capacity unit, exactly `3.6 C`.
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::electric::{ElectricCharge, ElectricCurrent, MILLIAMPERE_HOUR};
//! use metron_core::time::{Time, HOUR};
//!
//! let current = Measure::<ElectricCurrent>::new(0.5);
//! let duration = Measure::<Time>::in_unit(2.0, &HOUR);
//! let charge = current.times::<ElectricCharge, _>(duration).unwrap();
//! assert_eq!(charge.amount_in(&MILLIAMPERE_HOUR), 1000.0);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Electric current (`I`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::ELECTRIC_CURRENT, reference = AMPERE)]
pub enum ElectricCurrent {}

/// Electric charge (`T·I`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(0, 0, 1, 1, 0, 0, 0), reference = COULOMB)]
pub enum ElectricCharge {}

/// Voltage (`L²·M·T⁻³·I⁻¹`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(2, 1, -3, -1, 0, 0, 0), reference = VOLT)]
pub enum Voltage {}

/// Ampere (SI base unit).
pub const AMPERE: Unit = Unit::reference("A");
/// Milliampere.
pub const MILLIAMPERE: Unit = Unit::prefixed(Prefix::Milli, AMPERE);
/// Kiloampere.
pub const KILOAMPERE: Unit = Unit::prefixed(Prefix::Kilo, AMPERE);

/// Coulomb.
pub const COULOMB: Unit = Unit::reference("C");
/// Milliampere-hour (`3.6 C`).
pub const MILLIAMPERE_HOUR: Unit = Unit::multiplicative("mAh", 3.6);

/// Volt.
pub const VOLT: Unit = Unit::reference("V");
/// Kilovolt.
pub const KILOVOLT: Unit = Unit::prefixed(Prefix::Kilo, VOLT);
/// Millivolt.
pub const MILLIVOLT: Unit = Unit::prefixed(Prefix::Milli, VOLT);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .quantity::<ElectricCurrent>(&[MILLIAMPERE, KILOAMPERE])
        .quantity::<ElectricCharge>(&[MILLIAMPERE_HOUR])
        .quantity::<Voltage>(&[KILOVOLT, MILLIVOLT])
}

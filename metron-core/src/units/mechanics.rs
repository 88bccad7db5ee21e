//! Derived mechanical quantities.
//!
//! Every quantity here is a coherent SI derived quantity: its reference unit is the product of
//! base reference units, so dimension-checked arithmetic on reference amounts lands directly in
//! the reference unit of the result.
//!
//! | quantity       | dimension       | reference |
//! |----------------|-----------------|-----------|
//! | [`Velocity`]     | `L·T⁻¹`         | m/s       |
//! | [`Acceleration`] | `L·T⁻²`         | m/s²      |
//! | [`Force`]        | `M·L·T⁻²`       | N         |
//! | [`Pressure`]     | `M·L⁻¹·T⁻²`     | Pa        |
//! | [`Energy`]       | `M·L²·T⁻²`      | J         |
//! | [`Power`]        | `M·L²·T⁻³`      | W         |
//! | [`Frequency`]    | `T⁻¹`           | Hz        |
//! | [`Density`]      | `M·L⁻³`         | kg/m³     |
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::mechanics::{Energy, Power, KILOWATT_HOUR};
//! use metron_core::time::{Time, HOUR};
//!
//! let heater = Measure::<Power>::new(2_000.0);
//! let run = Measure::<Time>::in_unit(3.0, &HOUR);
//! let used = heater.times::<Energy, _>(run).unwrap();
//! assert_eq!(used.amount_in(&KILOWATT_HOUR), 6.0);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Kinematics
// ─────────────────────────────────────────────────────────────────────────────

/// Velocity (`L·T⁻¹`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(1, 0, -1, 0, 0, 0, 0), reference = METER_PER_SECOND)]
pub enum Velocity {}

/// Metre per second.
pub const METER_PER_SECOND: Unit = Unit::reference("m/s");
/// Kilometre per hour.
pub const KILOMETER_PER_HOUR: Unit = Unit::multiplicative("km/h", 1_000.0 / 3_600.0);

/// Acceleration (`L·T⁻²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(
    dimension = Dimension::new(1, 0, -2, 0, 0, 0, 0),
    reference = METER_PER_SECOND_SQUARED
)]
pub enum Acceleration {}

/// Metre per second squared.
pub const METER_PER_SECOND_SQUARED: Unit = Unit::reference("m/s²");

/// Frequency (`T⁻¹`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(0, 0, -1, 0, 0, 0, 0), reference = HERTZ)]
pub enum Frequency {}

/// Hertz.
pub const HERTZ: Unit = Unit::reference("Hz");
/// Kilohertz.
pub const KILOHERTZ: Unit = Unit::prefixed(Prefix::Kilo, HERTZ);
/// Megahertz.
pub const MEGAHERTZ: Unit = Unit::prefixed(Prefix::Mega, HERTZ);

// ─────────────────────────────────────────────────────────────────────────────
// Dynamics
// ─────────────────────────────────────────────────────────────────────────────

/// Force (`M·L·T⁻²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(1, 1, -2, 0, 0, 0, 0), reference = NEWTON)]
pub enum Force {}

/// Newton.
pub const NEWTON: Unit = Unit::reference("N");
/// Kilonewton.
pub const KILONEWTON: Unit = Unit::prefixed(Prefix::Kilo, NEWTON);

/// Pressure (`M·L⁻¹·T⁻²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(-1, 1, -2, 0, 0, 0, 0), reference = PASCAL)]
pub enum Pressure {}

/// Pascal.
pub const PASCAL: Unit = Unit::reference("Pa");
/// Kilopascal.
pub const KILOPASCAL: Unit = Unit::prefixed(Prefix::Kilo, PASCAL);
/// Bar (exactly `1e5 Pa`).
pub const BAR: Unit = Unit::multiplicative("bar", 1e5);

/// Energy (`M·L²·T⁻²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(2, 1, -2, 0, 0, 0, 0), reference = JOULE)]
pub enum Energy {}

/// Joule.
pub const JOULE: Unit = Unit::reference("J");
/// Kilojoule.
pub const KILOJOULE: Unit = Unit::prefixed(Prefix::Kilo, JOULE);
/// Watt-hour (`3600 J`).
pub const WATT_HOUR: Unit = Unit::multiplicative("Wh", 3_600.0);
/// Kilowatt-hour (`3.6 MJ`).
pub const KILOWATT_HOUR: Unit = Unit::prefixed(Prefix::Kilo, WATT_HOUR);
/// Thermochemical calorie (exactly `4.184 J`).
pub const CALORIE: Unit = Unit::multiplicative("cal", 4.184);

/// Power (`M·L²·T⁻³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::new(2, 1, -3, 0, 0, 0, 0), reference = WATT)]
pub enum Power {}

/// Watt.
pub const WATT: Unit = Unit::reference("W");
/// Kilowatt.
pub const KILOWATT: Unit = Unit::prefixed(Prefix::Kilo, WATT);
/// Megawatt.
pub const MEGAWATT: Unit = Unit::prefixed(Prefix::Mega, WATT);

/// Mass density (`M·L⁻³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(
    dimension = Dimension::new(-3, 1, 0, 0, 0, 0, 0),
    reference = KILOGRAM_PER_CUBIC_METER
)]
pub enum Density {}

/// Kilogram per cubic metre.
pub const KILOGRAM_PER_CUBIC_METER: Unit = Unit::reference("kg/m³");
/// Gram per cubic centimetre (`1000 kg/m³`).
pub const GRAM_PER_CUBIC_CENTIMETER: Unit = Unit::multiplicative("g/cm³", 1e3);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .quantity::<Velocity>(&[KILOMETER_PER_HOUR])
        .quantity::<Acceleration>(&[])
        .quantity::<Frequency>(&[KILOHERTZ, MEGAHERTZ])
        .quantity::<Force>(&[KILONEWTON])
        .quantity::<Pressure>(&[KILOPASCAL, BAR])
        .quantity::<Energy>(&[KILOJOULE, WATT_HOUR, KILOWATT_HOUR, CALORIE])
        .quantity::<Power>(&[KILOWATT, MEGAWATT])
        .quantity::<Density>(&[GRAM_PER_CUBIC_CENTIMETER])
}

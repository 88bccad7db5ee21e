//! Thermodynamic temperature.
//!
//! The reference unit is the kelvin. Degree Celsius and degree Fahrenheit are *functional* units:
//! their scales are offset from absolute zero, so conversion is an affine function rather than a
//! pure factor.
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::temperature::{Temperature, CELSIUS, FAHRENHEIT, KELVIN};
//!
//! let boiling = Measure::<Temperature>::in_unit(100.0, &CELSIUS);
//! assert_eq!(boiling.amount_in(&KELVIN), 373.15);
//! assert!((boiling.amount_in(&FAHRENHEIT) - 212.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Offset of the Celsius scale from absolute zero.
const CELSIUS_OFFSET: f64 = 273.15;

/// Thermodynamic temperature (`Θ`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::TEMPERATURE, reference = KELVIN)]
pub enum Temperature {}

/// Kelvin (SI base unit).
pub const KELVIN: Unit = Unit::reference("K");
/// Millikelvin.
pub const MILLIKELVIN: Unit = Unit::prefixed(Prefix::Milli, KELVIN);
/// Degree Celsius (`K − 273.15`).
pub const CELSIUS: Unit = Unit::functional("°C", celsius_to_kelvin, kelvin_to_celsius);
/// Degree Fahrenheit.
pub const FAHRENHEIT: Unit = Unit::functional("°F", fahrenheit_to_kelvin, kelvin_to_fahrenheit);

fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_OFFSET
}

fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_OFFSET
}

fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0 + CELSIUS_OFFSET
}

fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - CELSIUS_OFFSET) * 9.0 / 5.0 + 32.0
}

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<Temperature>(&[MILLIKELVIN, CELSIUS, FAHRENHEIT])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Measure;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Fixed points
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn freezing_point_of_water() {
        let t = Measure::<Temperature>::in_unit(0.0, &CELSIUS);
        assert_eq!(t.amount_in(&KELVIN), 273.15);
        assert_abs_diff_eq!(t.amount_in(&FAHRENHEIT), 32.0, epsilon = 1e-9);
    }

    #[test]
    fn room_temperature() {
        let t = Measure::<Temperature>::in_unit(293.15, &KELVIN);
        assert_abs_diff_eq!(t.amount_in(&CELSIUS), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn minus_forty_is_shared() {
        let t = Measure::<Temperature>::in_unit(-40.0, &FAHRENHEIT);
        assert_abs_diff_eq!(t.amount_in(&CELSIUS), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn millikelvin() {
        let t = Measure::<Temperature>::in_unit(1500.0, &MILLIKELVIN);
        assert_relative_eq!(t.amount(), 1.5, max_relative = 1e-12);
        assert_eq!(MILLIKELVIN.symbol(), "mK");
    }

    #[test]
    fn functional_units_are_flagged() {
        assert!(CELSIUS.is_functional());
        assert!(FAHRENHEIT.is_functional());
        assert!(!MILLIKELVIN.is_functional());
        assert!(!CELSIUS.is_reference());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_celsius_roundtrip(v in -273.15..1e6f64) {
            let t = Measure::<Temperature>::in_unit(v, &CELSIUS);
            prop_assert!((t.amount_in(&CELSIUS) - v).abs() < 1e-9);
        }

        #[test]
        fn prop_fahrenheit_roundtrip(v in -459.67..1e6f64) {
            let t = Measure::<Temperature>::in_unit(v, &FAHRENHEIT);
            prop_assert!((t.amount_in(&FAHRENHEIT) - v).abs() < 1e-6);
        }
    }
}

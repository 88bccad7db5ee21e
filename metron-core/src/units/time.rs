//! Time.
//!
//! The reference unit is the SI second. Minute, hour and day are the civil multiples
//! (`60 s`, `3600 s`, `86400 s`); leap seconds are not modelled.
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::time::{Time, DAY, HOUR};
//!
//! let t = Measure::<Time>::in_unit(1.0, &DAY);
//! assert_eq!(t.amount_in(&HOUR), 24.0);
//! ```

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Time (`T`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::TIME, reference = SECOND)]
pub enum Time {}

/// Second (SI base unit).
pub const SECOND: Unit = Unit::reference("s");
/// Millisecond (`1e-3 s`).
pub const MILLISECOND: Unit = Unit::prefixed(Prefix::Milli, SECOND);
/// Microsecond (`1e-6 s`).
pub const MICROSECOND: Unit = Unit::prefixed(Prefix::Micro, SECOND);
/// Nanosecond (`1e-9 s`).
pub const NANOSECOND: Unit = Unit::prefixed(Prefix::Nano, SECOND);
/// Minute (`60 s`).
pub const MINUTE: Unit = Unit::multiplicative("min", 60.0);
/// Hour (`3600 s`).
pub const HOUR: Unit = Unit::multiplicative("h", 3_600.0);
/// Day (`86400 s`).
pub const DAY: Unit = Unit::multiplicative("d", 86_400.0);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<Time>(&[MILLISECOND, MICROSECOND, NANOSECOND, MINUTE, HOUR, DAY])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Measure;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn hour_to_minutes() {
        let t = Measure::<Time>::in_unit(1.5, &HOUR);
        assert_eq!(t.amount(), 5_400.0);
        assert_eq!(t.amount_in(&MINUTE), 90.0);
    }

    #[test]
    fn sub_second_units() {
        let t = Measure::<Time>::in_unit(250.0, &MILLISECOND);
        assert_relative_eq!(t.amount(), 0.25, max_relative = 1e-12);
        assert_relative_eq!(t.amount_in(&MICROSECOND), 250_000.0, max_relative = 1e-12);
        assert_relative_eq!(t.amount_in(&NANOSECOND), 2.5e8, max_relative = 1e-12);
    }

    #[test]
    fn sum_of_mixed_units() {
        let total: Measure<Time> = [
            Measure::in_unit(1.0, &DAY),
            Measure::in_unit(2.0, &HOUR),
            Measure::in_unit(30.0, &MINUTE),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.amount(), 86_400.0 + 7_200.0 + 1_800.0);
    }

    proptest! {
        #[test]
        fn prop_minutes_roundtrip(v in -1e9..1e9f64) {
            let t = Measure::<Time>::in_unit(v, &MINUTE);
            let back = t.amount_in(&MINUTE);
            prop_assert!((back - v).abs() <= 1e-12 * v.abs().max(1.0));
        }
    }
}

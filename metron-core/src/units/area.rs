//! Area.
//!
//! The reference unit is the square metre. Squared prefixed lengths are plain multiplicative
//! units (the prefix applies to the metre, not to the square, so they cannot be expressed as
//! prefixed square metres).
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::area::{Area, HECTARE, SQUARE_KILOMETER};
//!
//! let field = Measure::<Area>::in_unit(250.0, &HECTARE);
//! assert_eq!(field.amount_in(&SQUARE_KILOMETER), 2.5);
//! ```

use crate::{Dimension, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Area (`L²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::LENGTH.power(2), reference = SQUARE_METER)]
pub enum Area {}

/// Square metre.
pub const SQUARE_METER: Unit = Unit::reference("m²");
/// Square centimetre (`1e-4 m²`).
pub const SQUARE_CENTIMETER: Unit = Unit::multiplicative("cm²", 1e-4);
/// Square decimetre (`1e-2 m²`).
pub const SQUARE_DECIMETER: Unit = Unit::multiplicative("dm²", 1e-2);
/// Square millimetre (`1e-6 m²`).
pub const SQUARE_MILLIMETER: Unit = Unit::multiplicative("mm²", 1e-6);
/// Square kilometre (`1e6 m²`).
pub const SQUARE_KILOMETER: Unit = Unit::multiplicative("km²", 1e6);
/// Hectare (`1e4 m²`).
pub const HECTARE: Unit = Unit::multiplicative("ha", 1e4);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<Area>(&[
        SQUARE_CENTIMETER,
        SQUARE_DECIMETER,
        SQUARE_MILLIMETER,
        SQUARE_KILOMETER,
        HECTARE,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Length, CENTIMETER};
    use crate::{Measure, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn dimension_is_length_squared() {
        assert_eq!(Area::dimension(), Dimension::new(2, 0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn centimeter_squared_matches_square_centimeter() {
        let side = Measure::<Length>::in_unit(1.0, &CENTIMETER);
        let a = side.powi::<Area>(2).unwrap();
        assert_relative_eq!(a.amount_in(&SQUARE_CENTIMETER), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn ratio_of_areas() {
        let a = Measure::<Area>::in_unit(500.0, &SQUARE_CENTIMETER);
        let b = Measure::<Area>::in_unit(5.0, &SQUARE_DECIMETER);
        assert_relative_eq!(a / b, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn hectare_in_square_meters() {
        assert_eq!(Measure::<Area>::in_unit(1.0, &HECTARE).amount(), 10_000.0);
        assert_eq!(Measure::<Area>::in_unit(2.0, &SQUARE_MILLIMETER).amount(), 2e-6);
    }
}

//! Core type system for dimension-checked physical quantities.
//!
//! `metron-core` provides the dimensional-analysis model:
//!
//! - A [`Dimension`] is a vector of seven SI base exponents plus a *differentiator* that keeps
//!   dimensionless quantities (angle, refractive index, …) apart.
//! - A [`Unit`] converts amounts to and from the reference unit of its quantity, either by a
//!   scale factor (metre, inch) or by a function pair (degree Celsius).
//! - A quantity is a zero-sized marker type implementing [`Quantity`].
//! - A [`Measure<Q>`] is an `f64` amount of `Q`, always stored in `Q`'s reference unit.
//! - The [`arithmetic`] module combines measures of *different* quantities, checking the result
//!   dimension against the claimed target quantity.
//! - A [`UnitRegistry`] resolves unit symbols at runtime.
//!
//! Most users should depend on `metron` (the facade crate) unless they need direct access to these
//! primitives.
//!
//! # What this crate solves
//!
//! - Type-level separation of quantities (length vs time vs angle, …).
//! - Runtime dimension checks wherever a product, quotient or power claims a result quantity.
//! - Conversion between units without drifting away from the reference representation.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Measure` is `f64`).
//! - Symbolic simplification of unit expressions.
//! - Serialization of measures.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::length::{Length, KILOMETER, METER};
//!
//! let d = Measure::<Length>::in_unit(1.25, &KILOMETER);
//! assert_eq!(d.amount_in(&METER), 1250.0);
//! ```
//!
//! Combine quantities with a checked result:
//!
//! ```rust
//! use metron_core::Measure;
//! use metron_core::length::Length;
//! use metron_core::mechanics::Velocity;
//! use metron_core::time::Time;
//!
//! let d = Measure::<Length>::new(100.0);
//! let t = Measure::<Time>::new(20.0);
//! let v = d.divide::<Velocity, _>(t).unwrap();
//! assert_eq!(v.amount(), 5.0);
//! assert!(d.times::<Velocity, _>(t).is_err());
//! ```
//!
//! Resolve units by symbol:
//!
//! ```rust
//! use metron_core::length::Length;
//! use metron_core::measure_as;
//!
//! let d = measure_as::<Length>(12.5, "CM").unwrap();
//! assert_eq!(d.amount(), 0.125);
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with [`Error`]. Amount arithmetic is pure `f64` and
//! follows IEEE-754 behavior. The only panics are documented ones: building a `const` unit from
//! an invalid factor, and running the prime sequence dry while defining a built-in quantity.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod arithmetic;
pub mod differentiator;
mod dimension;
mod error;
mod measure;
mod quantity;
mod registry;
mod unit;
mod unit_measure;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use arithmetic::Factor;
pub use differentiator::{DifferentiatorRegistry, PrimeSequence};
pub use dimension::Dimension;
pub use error::{Error, Result};
pub use measure::Measure;
pub use quantity::{Quantity, QuantityKind};
pub use registry::{
    measure_as, measure_from, resolve_unit, AnyMeasure, RegistryBuilder, UnitRegistry,
};
pub use unit::{Prefix, Unit};
pub use unit_measure::UnitMeasure;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity modules
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantities and units, grouped by domain.
///
/// These are defined in `metron-core` so that the `Quantity` derive can expand against this
/// crate's root.
pub mod units;

pub use units::angle;
pub use units::area;
pub use units::dimensionless;
pub use units::electric;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::photometry;
pub use units::substance;
pub use units::temperature;
pub use units::time;
pub use units::volume;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test quantity for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    const TEST_UNIT: Unit = Unit::reference("tu");
    const DOUBLE_TEST_UNIT: Unit = Unit::multiplicative("dtu", 2.0);
    const HALF_TEST_UNIT: Unit = Unit::multiplicative("htu", 0.5);

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    enum TestQuantity {}
    impl Quantity for TestQuantity {
        const NAME: &'static str = "TestQuantity";
        const REFERENCE: Unit = TEST_UNIT;
        fn dimension() -> Dimension {
            Dimension::new(1, 1, 0, 0, 0, 0, 0)
        }
    }

    type TQ = Measure<TestQuantity>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion through units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn measure_in_reference_unit() {
        let q = TQ::in_unit(42.0, &TEST_UNIT);
        assert_eq!(q.amount(), 42.0);
    }

    #[test]
    fn measure_conversion_to_different_unit() {
        // 10 tu = 5 dtu = 20 htu
        let q = TQ::new(10.0);
        assert_relative_eq!(q.amount_in(&DOUBLE_TEST_UNIT), 5.0);
        assert_relative_eq!(q.amount_in(&HALF_TEST_UNIT), 20.0);
    }

    #[test]
    fn measure_conversion_roundtrip() {
        let original = TQ::in_unit(100.0, &HALF_TEST_UNIT);
        let back = TQ::in_unit(original.amount_in(&DOUBLE_TEST_UNIT), &DOUBLE_TEST_UNIT);
        assert_relative_eq!(back.amount(), original.amount());
    }

    #[test]
    fn display_shows_reference_symbol() {
        assert_eq!(TQ::new(1.5).to_string(), "1.5 tu");
        assert_eq!(TQ::new(1.5).convert_to(DOUBLE_TEST_UNIT).to_string(), "0.75 dtu");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Re-exports
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kind_describes_quantity() {
        let kind = QuantityKind::of::<TestQuantity>();
        assert_eq!(kind.name(), "TestQuantity");
        assert_eq!(kind.reference_unit(), TEST_UNIT);
        assert!(kind.is::<TestQuantity>());
        assert!(!kind.is::<length::Length>());
        assert!(!kind.matches::<length::Length>());
    }

    #[test]
    fn standard_quantities_are_reachable_from_root() {
        let d = Measure::<length::Length>::in_unit(2.0, &length::KILOMETER);
        let t = Measure::<time::Time>::in_unit(1.0, &time::MINUTE);
        let v = d.divide::<mechanics::Velocity, _>(t).unwrap();
        assert_relative_eq!(v.amount(), 2000.0 / 60.0);
    }

    #[test]
    fn error_reexport_formats() {
        let err = resolve_unit("not-a-real-unit").unwrap_err();
        assert_eq!(err, Error::UnitNotFound("not-a-real-unit".to_string()));
        assert_eq!(err.to_string(), "unit not found: not-a-real-unit");
    }
}

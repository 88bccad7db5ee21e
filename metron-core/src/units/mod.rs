//! Predefined quantities and units grouped by domain.
//!
//! `metron-core` ships the SI base quantities, the common derived quantities and a few named
//! dimensionless ratios, so that conversions and checked arithmetic work out of the box.
//!
//! ## Modules
//!
//! - [`length`]: metre ladder, imperial units, astronomical unit.
//! - [`mass`]: kilogram (reference), gram ladder, tonne, pound, ounce.
//! - [`time`]: second (reference) and civil multiples.
//! - [`electric`]: current, charge and voltage.
//! - [`temperature`]: kelvin (reference), Celsius and Fahrenheit as functional units.
//! - [`photometry`]: luminous intensity.
//! - [`substance`]: amount of substance.
//! - [`area`] and [`volume`]: squared and cubed lengths, hectare, litre ladder.
//! - [`mechanics`]: velocity, acceleration, force, pressure, energy, power, frequency, density.
//! - [`angle`]: plane angle (own differentiator) and solid angle (plane angle squared).
//! - [`dimensionless`]: plain numbers and named dimensionless ratios.
//!
//! [`register_standard`] adds all of them to a [`RegistryBuilder`]; the
//! [standard registry](crate::UnitRegistry::standard) is built that way.

use crate::RegistryBuilder;

pub mod angle;
pub mod area;
pub mod dimensionless;
pub mod electric;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod photometry;
pub mod substance;
pub mod temperature;
pub mod time;
pub mod volume;

/// Registers every predefined quantity and unit.
///
/// Base quantities come first, so they win case-insensitive symbol lookups against derived ones.
///
/// ```rust
/// use metron_core::units::register_standard;
/// use metron_core::UnitRegistry;
///
/// let registry = register_standard(UnitRegistry::builder())
///     .alias("metre", "m")
///     .build()
///     .unwrap();
/// assert_eq!(registry.resolve("METRE").unwrap().symbol(), "m");
/// ```
pub fn register_standard(builder: RegistryBuilder) -> RegistryBuilder {
    let builder = length::register(builder);
    let builder = mass::register(builder);
    let builder = time::register(builder);
    let builder = electric::register(builder);
    let builder = temperature::register(builder);
    let builder = photometry::register(builder);
    let builder = substance::register(builder);
    let builder = area::register(builder);
    let builder = volume::register(builder);
    let builder = mechanics::register(builder);
    let builder = angle::register(builder);
    dimensionless::register(builder)
}

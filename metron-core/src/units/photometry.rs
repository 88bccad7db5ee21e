//! Luminous intensity.

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Luminous intensity (`J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::LUMINOUS_INTENSITY, reference = CANDELA)]
pub enum LuminousIntensity {}

/// Candela (SI base unit).
pub const CANDELA: Unit = Unit::reference("cd");
/// Millicandela.
pub const MILLICANDELA: Unit = Unit::prefixed(Prefix::Milli, CANDELA);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<LuminousIntensity>(&[MILLICANDELA])
}

//! Amount of substance.

use crate::{Dimension, Prefix, RegistryBuilder, Unit};
use metron_derive::Quantity;

/// Amount of substance (`N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Quantity)]
#[quantity(dimension = Dimension::AMOUNT_OF_SUBSTANCE, reference = MOLE)]
pub enum AmountOfSubstance {}

/// Mole (SI base unit).
pub const MOLE: Unit = Unit::reference("mol");
/// Millimole.
pub const MILLIMOLE: Unit = Unit::prefixed(Prefix::Milli, MOLE);
/// Kilomole.
pub const KILOMOLE: Unit = Unit::prefixed(Prefix::Kilo, MOLE);

pub(crate) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder.quantity::<AmountOfSubstance>(&[MILLIMOLE, KILOMOLE])
}

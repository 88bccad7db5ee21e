//! Quantity marker trait and its runtime descriptor.

use crate::{Dimension, Unit};
use core::any::TypeId;
use core::fmt::Debug;

/// Trait implemented by every **quantity** marker type.
///
/// * `NAME` is the human-readable name used in error messages (e.g. `"Length"`).
/// * `REFERENCE` is the unit every [`Measure`](crate::Measure) of this quantity is stored in.
/// * [`Quantity::dimension`] is the quantity's SI [`Dimension`].
///
/// Quantity types are compared by dimension, not by identity, whenever measures of different
/// quantities are combined: two distinct marker types with equal dimensions are interchangeable
/// for the arithmetic layer while remaining distinct for ordinary typing.
///
/// The built-in quantities are declared with `#[derive(Quantity)]`. Outside this crate the trait is
/// implemented by hand:
///
/// ```rust
/// use metron_core::{Dimension, Measure, Quantity, Unit};
/// use metron_core::length::Length;
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub enum Height {}
///
/// impl Quantity for Height {
///     const NAME: &'static str = "Height";
///     const REFERENCE: Unit = Unit::reference("m");
///     fn dimension() -> Dimension {
///         Dimension::LENGTH
///     }
/// }
///
/// let h = Measure::<Height>::new(3.0);
/// let l: Measure<Length> = h.cast().unwrap();
/// assert_eq!(l.amount(), 3.0);
/// ```
pub trait Quantity: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Display name of the quantity.
    const NAME: &'static str;

    /// Reference unit in which measures are stored.
    const REFERENCE: Unit;

    /// SI dimension of the quantity.
    fn dimension() -> Dimension;
}

/// Runtime descriptor of a [`Quantity`] type, as indexed by the
/// [`UnitRegistry`](crate::UnitRegistry).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantityKind {
    name: &'static str,
    dimension: Dimension,
    reference: Unit,
    type_id: TypeId,
}

impl QuantityKind {
    /// Describes `Q`.
    pub fn of<Q: Quantity>() -> Self {
        Self {
            name: Q::NAME,
            dimension: Q::dimension(),
            reference: Q::REFERENCE,
            type_id: TypeId::of::<Q>(),
        }
    }

    /// Display name of the quantity.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// SI dimension of the quantity.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Reference unit of the quantity.
    pub fn reference_unit(&self) -> Unit {
        self.reference
    }

    /// `true` when this describes exactly the type `Q`.
    pub fn is<Q: Quantity>(&self) -> bool {
        self.type_id == TypeId::of::<Q>()
    }

    /// `true` when `Q` has the same dimension, differentiator included.
    pub fn matches<Q: Quantity>(&self) -> bool {
        self.dimension == Q::dimension()
    }
}

//! Dimension vectors.

use core::fmt::{self, Display, Formatter};
use core::ops::{Div, Mul};

const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "J", "N"];

/// The SI dimension of a quantity.
///
/// A dimension is the tuple of exponents of the seven SI base dimensions
/// (length, mass, time, electric current, thermodynamic temperature, luminous intensity and amount
/// of substance) plus a *differentiator*.
///
/// The differentiator only carries meaning when all seven exponents are zero. It separates
/// dimensionless quantities that have nothing to do with each other (a plane angle is not a
/// refractive index), so that multiplying two unrelated dimensionless quantities never lands on
/// a third one by accident. Plain numbers use a differentiator of `1.0`; named dimensionless
/// quantities draw a prime from the [`DifferentiatorRegistry`](crate::DifferentiatorRegistry).
///
/// Equality is exact over the exponents *and* the differentiator. See
/// [`Dimension::same_base_dimension`] for the weaker comparison used by casts.
///
/// ```rust
/// use metron_core::Dimension;
///
/// let velocity = Dimension::LENGTH / Dimension::TIME;
/// let acceleration = velocity / Dimension::TIME;
/// assert_eq!(acceleration * Dimension::TIME.power(2), Dimension::LENGTH);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimension {
    exponents: [i32; 7],
    differentiator: f64,
}

impl Dimension {
    /// The identity dimension: all exponents zero, differentiator `1.0`.
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0, 0, 0);
    /// Length (`L`).
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// Mass (`M`).
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// Time (`T`).
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    /// Electric current (`I`).
    pub const ELECTRIC_CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    /// Thermodynamic temperature (`Θ`).
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    /// Luminous intensity (`J`).
    pub const LUMINOUS_INTENSITY: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    /// Amount of substance (`N`).
    pub const AMOUNT_OF_SUBSTANCE: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    /// Creates a dimension from its seven base exponents, with differentiator `1.0`.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        electric_current: i32,
        temperature: i32,
        luminous_intensity: i32,
        amount_of_substance: i32,
    ) -> Self {
        Self {
            exponents: [
                length,
                mass,
                time,
                electric_current,
                temperature,
                luminous_intensity,
                amount_of_substance,
            ],
            differentiator: 1.0,
        }
    }

    /// Creates a dimensionless dimension tagged with `differentiator`.
    pub const fn dimensionless(differentiator: f64) -> Self {
        Self {
            exponents: [0; 7],
            differentiator,
        }
    }

    /// The seven base exponents, in `L, M, T, I, Θ, J, N` order.
    #[inline]
    pub const fn exponents(&self) -> [i32; 7] {
        self.exponents
    }

    /// The dimensionless differentiator.
    #[inline]
    pub const fn differentiator(&self) -> f64 {
        self.differentiator
    }

    /// `true` when every base exponent is zero (whatever the differentiator).
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Adds exponents and multiplies differentiators.
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents) {
            *e += o;
        }
        Dimension {
            exponents,
            differentiator: self.differentiator * other.differentiator,
        }
    }

    /// Subtracts exponents and divides differentiators.
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents) {
            *e -= o;
        }
        Dimension {
            exponents,
            differentiator: self.differentiator / other.differentiator,
        }
    }

    /// Scales every exponent by `exponent` and raises the differentiator to it.
    pub fn power(&self, exponent: i32) -> Dimension {
        Dimension {
            exponents: self.exponents.map(|e| e * exponent),
            differentiator: self.differentiator.powi(exponent),
        }
    }

    /// Compares the seven base exponents only, ignoring the differentiator.
    ///
    /// This is intentionally weaker than `==` and is what [`Measure::cast`](crate::Measure::cast)
    /// relies on: a plane angle can be cast to a plain number even though their differentiators
    /// differ.
    pub fn same_base_dimension(&self, other: &Dimension) -> bool {
        self.exponents == other.exponents
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::NONE
    }
}

impl Mul for Dimension {
    type Output = Dimension;
    #[inline]
    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;
    #[inline]
    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, exponent) in SYMBOLS.iter().zip(self.exponents) {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            write!(f, "{}^{}", symbol, exponent)?;
            first = false;
        }
        if first {
            f.write_str("1")?;
        }
        if self.differentiator != 1.0 {
            write!(f, " [×{}]", self.differentiator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_dimension() -> impl Strategy<Value = Dimension> {
        (
            prop::array::uniform7(-4i32..=4),
            prop::sample::select(vec![1.0, 2.0, 3.0, 5.0, 7.0]),
        )
            .prop_map(|(exponents, differentiator)| Dimension {
                exponents,
                differentiator,
            })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiply_adds_exponents() {
        let area = Dimension::LENGTH * Dimension::LENGTH;
        assert_eq!(area.exponents(), [2, 0, 0, 0, 0, 0, 0]);
        assert_eq!(area.differentiator(), 1.0);
    }

    #[test]
    fn divide_subtracts_exponents() {
        let velocity = Dimension::LENGTH / Dimension::TIME;
        assert_eq!(velocity.exponents(), [1, 0, -1, 0, 0, 0, 0]);
    }

    #[test]
    fn power_scales_exponents_and_differentiator() {
        let angle = Dimension::dimensionless(2.0);
        let solid = angle.power(2);
        assert!(solid.is_dimensionless());
        assert_eq!(solid.differentiator(), 4.0);

        let inverse = Dimension::TIME.power(-1);
        assert_eq!(inverse.exponents(), [0, 0, -1, 0, 0, 0, 0]);
    }

    #[test]
    fn differentiators_multiply_and_divide() {
        let a = Dimension::dimensionless(2.0);
        let b = Dimension::dimensionless(3.0);
        assert_eq!((a * b).differentiator(), 6.0);
        assert_eq!((a / a), Dimension::NONE);
    }

    #[test]
    fn equality_includes_differentiator() {
        let angle = Dimension::dimensionless(2.0);
        let index = Dimension::dimensionless(3.0);
        assert_ne!(angle, index);
        assert_ne!(angle, Dimension::NONE);
        assert!(angle.same_base_dimension(&index));
        assert!(angle.same_base_dimension(&Dimension::NONE));
    }

    #[test]
    fn same_base_dimension_checks_exponents() {
        assert!(!Dimension::LENGTH.same_base_dimension(&Dimension::TIME));
        assert!(Dimension::LENGTH.same_base_dimension(&Dimension::LENGTH));
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Dimension::default(), Dimension::NONE);
        assert!(Dimension::NONE.is_dimensionless());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_lists_non_zero_exponents() {
        let force = Dimension::new(1, 1, -2, 0, 0, 0, 0);
        assert_eq!(force.to_string(), "L^1·M^1·T^-2");
    }

    #[test]
    fn display_dimensionless() {
        assert_eq!(Dimension::NONE.to_string(), "1");
        assert_eq!(Dimension::dimensionless(3.0).to_string(), "1 [×3]");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_divide_undoes_multiply(d1 in arb_dimension(), d2 in arb_dimension()) {
            prop_assert_eq!((d1 * d2) / d2, d1);
        }

        #[test]
        fn prop_identity(d in arb_dimension()) {
            prop_assert_eq!(d * Dimension::NONE, d);
            prop_assert_eq!(d / Dimension::NONE, d);
        }

        #[test]
        fn prop_power_one_is_stable(d in arb_dimension(), e in -3i32..=3) {
            let raised = d.power(e);
            prop_assert_eq!(raised.power(1), raised);
        }

        #[test]
        fn prop_power_matches_repeated_multiply(d in arb_dimension()) {
            prop_assert_eq!(d.power(3), d * d * d);
            prop_assert_eq!(d.power(0), Dimension::NONE);
        }
    }
}

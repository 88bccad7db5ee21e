//! Units and SI prefixes.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};

/// SI decimal prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `10^-24`
    Yocto,
    /// `10^-21`
    Zepto,
    /// `10^-18`
    Atto,
    /// `10^-15`
    Femto,
    /// `10^-12`
    Pico,
    /// `10^-9`
    Nano,
    /// `10^-6`
    Micro,
    /// `10^-3`
    Milli,
    /// `10^-2`
    Centi,
    /// `10^-1`
    Deci,
    /// `10^1`
    Deca,
    /// `10^2`
    Hecto,
    /// `10^3`
    Kilo,
    /// `10^6`
    Mega,
    /// `10^9`
    Giga,
    /// `10^12`
    Tera,
    /// `10^15`
    Peta,
    /// `10^18`
    Exa,
    /// `10^21`
    Zetta,
    /// `10^24`
    Yotta,
}

impl Prefix {
    /// Every prefix, smallest first.
    pub const ALL: [Prefix; 20] = [
        Prefix::Yocto,
        Prefix::Zepto,
        Prefix::Atto,
        Prefix::Femto,
        Prefix::Pico,
        Prefix::Nano,
        Prefix::Micro,
        Prefix::Milli,
        Prefix::Centi,
        Prefix::Deci,
        Prefix::Deca,
        Prefix::Hecto,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
        Prefix::Exa,
        Prefix::Zetta,
        Prefix::Yotta,
    ];

    /// Power of ten this prefix stands for.
    pub const fn exponent(self) -> i32 {
        match self {
            Prefix::Yocto => -24,
            Prefix::Zepto => -21,
            Prefix::Atto => -18,
            Prefix::Femto => -15,
            Prefix::Pico => -12,
            Prefix::Nano => -9,
            Prefix::Micro => -6,
            Prefix::Milli => -3,
            Prefix::Centi => -2,
            Prefix::Deci => -1,
            Prefix::Deca => 1,
            Prefix::Hecto => 2,
            Prefix::Kilo => 3,
            Prefix::Mega => 6,
            Prefix::Giga => 9,
            Prefix::Tera => 12,
            Prefix::Peta => 15,
            Prefix::Exa => 18,
            Prefix::Zetta => 21,
            Prefix::Yotta => 24,
        }
    }

    /// Symbol prepended to the prefixless unit symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Prefix::Yocto => "y",
            Prefix::Zepto => "z",
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "µ",
            Prefix::Milli => "m",
            Prefix::Centi => "c",
            Prefix::Deci => "d",
            Prefix::Deca => "da",
            Prefix::Hecto => "h",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
        }
    }

    /// `10^exponent`, written out so it stays exact and usable in `const` items.
    pub const fn factor(self) -> f64 {
        match self {
            Prefix::Yocto => 1e-24,
            Prefix::Zepto => 1e-21,
            Prefix::Atto => 1e-18,
            Prefix::Femto => 1e-15,
            Prefix::Pico => 1e-12,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Centi => 1e-2,
            Prefix::Deci => 1e-1,
            Prefix::Deca => 1e1,
            Prefix::Hecto => 1e2,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
        }
    }
}

/// How a unit reaches its quantity's reference unit once its scale factor is applied.
#[derive(Clone, Copy, Debug)]
enum Converter {
    Linear,
    Functional {
        to_reference: fn(f64) -> f64,
        from_reference: fn(f64) -> f64,
    },
}

/// Rejects zero, NaN and infinities.
const fn is_valid_factor(factor: f64) -> bool {
    factor != 0.0 && (factor - factor) == 0.0
}

/// A unit of measurement.
///
/// A unit knows how to move an amount to and from the *reference unit* of its quantity:
///
/// ```text
/// to_reference(a)   = converter.to(a * factor)
/// from_reference(a) = converter.from(a) / factor
/// ```
///
/// where the converter is the identity for multiplicative units and a caller-supplied function
/// pair for functional units (Celsius, Fahrenheit, …). Units are `Copy` and every constructor is a
/// `const fn`, so predefined units are plain `const` items.
///
/// Constructors panic on a zero or non-finite factor; inside a `const` item this is a compile
/// error. Use [`Unit::try_scaled`] or [`Unit::try_multiplicative`] for runtime-provided factors.
///
/// ```rust
/// use metron_core::{Prefix, Unit};
///
/// const METER: Unit = Unit::reference("m");
/// const KILOMETER: Unit = Unit::prefixed(Prefix::Kilo, METER);
///
/// assert_eq!(KILOMETER.symbol(), "km");
/// assert_eq!(KILOMETER.to_reference(1.5), 1500.0);
/// ```
#[derive(Clone, Copy)]
pub struct Unit {
    prefix: Option<Prefix>,
    symbol: &'static str,
    factor: f64,
    converter: Converter,
}

impl Unit {
    /// The reference unit of a quantity: both conversions are the identity.
    pub const fn reference(symbol: &'static str) -> Self {
        Self {
            prefix: None,
            symbol,
            factor: 1.0,
            converter: Converter::Linear,
        }
    }

    /// A unit worth `factor` reference units.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is zero or not finite.
    pub const fn multiplicative(symbol: &'static str, factor: f64) -> Self {
        Self::scaled(symbol, factor, Self::reference(symbol))
    }

    /// A unit worth `factor` times `base`.
    ///
    /// The base unit's own conversion is composed, so `base` does not need to be a reference
    /// unit: a litre can be defined from the cubic decimetre, or a kelvin-sized step from a
    /// functional unit.
    ///
    /// # Panics
    ///
    /// Panics if `factor`, or `factor` times the base factor, is zero or not finite.
    pub const fn scaled(symbol: &'static str, factor: f64, base: Unit) -> Self {
        if !is_valid_factor(factor) {
            panic!("unit scale factor must be finite and non-zero");
        }
        let composed = factor * base.factor;
        if !is_valid_factor(composed) {
            panic!("composed unit scale factor must be finite and non-zero");
        }
        Self {
            prefix: None,
            symbol,
            factor: composed,
            converter: base.converter,
        }
    }

    /// A unit defined by an arbitrary pair of conversion functions.
    ///
    /// The pair is not checked for being mutually inverse; supplying a consistent pair is up to
    /// the caller.
    pub const fn functional(
        symbol: &'static str,
        to_reference: fn(f64) -> f64,
        from_reference: fn(f64) -> f64,
    ) -> Self {
        Self {
            prefix: None,
            symbol,
            factor: 1.0,
            converter: Converter::Functional {
                to_reference,
                from_reference,
            },
        }
    }

    /// `base` with an SI prefix: symbol `glyph + base symbol`, scale `10^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if `base` already carries a prefix, or if the prefixed factor underflows to zero
    /// or overflows to infinity.
    pub const fn prefixed(prefix: Prefix, base: Unit) -> Self {
        if base.prefix.is_some() {
            panic!("cannot prefix an already prefixed unit");
        }
        let composed = prefix.factor() * base.factor;
        if !is_valid_factor(composed) {
            panic!("prefixed unit scale factor must be finite and non-zero");
        }
        Self {
            prefix: Some(prefix),
            symbol: base.symbol,
            factor: composed,
            converter: base.converter,
        }
    }

    /// Fallible counterpart of [`Unit::scaled`].
    pub fn try_scaled(symbol: &'static str, factor: f64, base: Unit) -> Result<Self> {
        if !is_valid_factor(factor) {
            return Err(Error::InvalidUnit(format!(
                "scale factor {} of '{}' must be finite and non-zero",
                factor, symbol
            )));
        }
        let composed = factor * base.factor;
        if !is_valid_factor(composed) {
            return Err(Error::InvalidUnit(format!(
                "scale factor {} of '{}' relative to '{}' composes to {}",
                factor,
                symbol,
                base.symbol(),
                composed
            )));
        }
        Ok(Self::scaled(symbol, factor, base))
    }

    /// Fallible counterpart of [`Unit::multiplicative`].
    pub fn try_multiplicative(symbol: &'static str, factor: f64) -> Result<Self> {
        Self::try_scaled(symbol, factor, Self::reference(symbol))
    }

    /// Fallible counterpart of [`Unit::prefixed`].
    pub fn try_prefixed(prefix: Prefix, base: Unit) -> Result<Self> {
        if base.prefix.is_some() {
            return Err(Error::InvalidUnit(format!(
                "'{}' already carries a prefix",
                base.symbol()
            )));
        }
        let composed = prefix.factor() * base.factor;
        if !is_valid_factor(composed) {
            return Err(Error::InvalidUnit(format!(
                "prefix {}{} composes to scale factor {}",
                prefix.glyph(),
                base.symbol(),
                composed
            )));
        }
        Ok(Self::prefixed(prefix, base))
    }

    /// Full display symbol, including the prefix glyph.
    pub fn symbol(&self) -> Cow<'static, str> {
        match self.prefix {
            None => Cow::Borrowed(self.symbol),
            Some(prefix) => Cow::Owned(format!("{}{}", prefix.glyph(), self.symbol)),
        }
    }

    /// The symbol without its prefix glyph.
    pub const fn prefixless_symbol(&self) -> &'static str {
        self.symbol
    }

    /// The SI prefix, if any.
    pub const fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    /// Overall scale factor applied before the converter.
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// `true` for units whose conversion is not a pure scale.
    pub const fn is_functional(&self) -> bool {
        matches!(self.converter, Converter::Functional { .. })
    }

    /// `true` when both conversions are the identity.
    pub fn is_reference(&self) -> bool {
        !self.is_functional() && self.factor == 1.0
    }

    /// Converts an amount expressed in this unit to the reference unit.
    #[inline]
    pub fn to_reference(&self, amount: f64) -> f64 {
        let scaled = amount * self.factor;
        match self.converter {
            Converter::Linear => scaled,
            Converter::Functional { to_reference, .. } => to_reference(scaled),
        }
    }

    /// Converts an amount expressed in the reference unit to this unit.
    #[inline]
    pub fn from_reference(&self, amount: f64) -> f64 {
        let converted = match self.converter {
            Converter::Linear => amount,
            Converter::Functional { from_reference, .. } => from_reference(amount),
        };
        converted / self.factor
    }
}

/// Units compare by value: same full symbol, same factor, and converters that agree on a pair of
/// probe amounts. Two independently built but equivalent units are equal.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol() == other.symbol()
            && self.factor == other.factor
            && self.is_functional() == other.is_functional()
            && [0.0, 1.0]
                .iter()
                .all(|&probe| self.to_reference(probe) == other.to_reference(probe))
    }
}

impl Debug for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("symbol", &self.symbol())
            .field("factor", &self.factor)
            .field("functional", &self.is_functional())
            .finish()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const METER: Unit = Unit::reference("m");
    const KILOMETER: Unit = Unit::prefixed(Prefix::Kilo, METER);
    const CENTIMETER: Unit = Unit::prefixed(Prefix::Centi, METER);
    const INCH: Unit = Unit::multiplicative("in", 0.0254);
    const FOOT: Unit = Unit::scaled("ft", 12.0, INCH);

    const KELVIN: Unit = Unit::reference("K");
    const CELSIUS: Unit = Unit::functional("°C", |c| c + 273.15, |k| k - 273.15);
    const MILLI_CELSIUS: Unit = Unit::prefixed(Prefix::Milli, CELSIUS);

    // ─────────────────────────────────────────────────────────────────────────────
    // Prefixes
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn prefix_factor_matches_exponent() {
        for prefix in Prefix::ALL {
            assert_relative_eq!(
                prefix.factor(),
                10f64.powi(prefix.exponent()),
                max_relative = 1e-15
            );
        }
    }

    #[test]
    fn prefixed_symbol_and_factor() {
        assert_eq!(KILOMETER.symbol(), "km");
        assert_eq!(KILOMETER.prefixless_symbol(), "m");
        assert_eq!(KILOMETER.prefix(), Some(Prefix::Kilo));
        assert_eq!(KILOMETER.factor(), 1e3);
        assert_eq!(CENTIMETER.symbol(), "cm");
        assert_eq!(Unit::prefixed(Prefix::Deca, METER).symbol(), "dam");
        assert_eq!(Unit::prefixed(Prefix::Micro, METER).symbol(), "µm");
    }

    #[test]
    fn double_prefix_is_rejected() {
        let err = Unit::try_prefixed(Prefix::Kilo, KILOMETER).unwrap_err();
        assert!(matches!(err, Error::InvalidUnit(_)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn reference_is_identity() {
        assert!(METER.is_reference());
        assert_eq!(METER.to_reference(42.0), 42.0);
        assert_eq!(METER.from_reference(42.0), 42.0);
    }

    #[test]
    fn multiplicative_conversion() {
        assert_eq!(KILOMETER.to_reference(2.0), 2000.0);
        assert_eq!(KILOMETER.from_reference(2000.0), 2.0);
        assert!(!KILOMETER.is_reference());
    }

    #[test]
    fn chained_unit_composes_factor() {
        assert_relative_eq!(FOOT.factor(), 0.3048, max_relative = 1e-15);
        assert_relative_eq!(FOOT.to_reference(1.0), 0.3048, max_relative = 1e-15);
    }

    #[test]
    fn functional_conversion() {
        assert!(CELSIUS.is_functional());
        assert!(!CELSIUS.is_reference());
        assert_relative_eq!(CELSIUS.to_reference(0.0), 273.15);
        assert_relative_eq!(CELSIUS.from_reference(273.15), 0.0);
        assert_eq!(KELVIN.to_reference(273.15), 273.15);
    }

    #[test]
    fn prefixed_functional_unit_composes() {
        // 1000 m°C is 1 °C.
        assert_relative_eq!(MILLI_CELSIUS.to_reference(1000.0), 274.15, epsilon = 1e-9);
        assert_relative_eq!(MILLI_CELSIUS.from_reference(274.15), 1000.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction errors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn zero_factor_is_rejected() {
        let err = Unit::try_multiplicative("bad", 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidUnit(_)));
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn non_finite_factor_is_rejected() {
        assert!(Unit::try_multiplicative("nan", f64::NAN).is_err());
        assert!(Unit::try_multiplicative("inf", f64::INFINITY).is_err());
        assert!(Unit::try_scaled("ninf", f64::NEG_INFINITY, METER).is_err());
        assert!(Unit::try_multiplicative("ok", -2.0).is_ok());
    }

    #[test]
    #[should_panic(expected = "finite and non-zero")]
    fn zero_factor_panics_eagerly() {
        let _ = Unit::multiplicative("bad", 0.0);
    }

    #[test]
    fn composed_factor_underflow_is_rejected() {
        let tiny = Unit::try_multiplicative("tiny", 1e-200).unwrap();
        let err = Unit::try_scaled("tinier", 1e-200, tiny).unwrap_err();
        assert!(matches!(err, Error::InvalidUnit(_)));
        assert!(err.to_string().contains("tinier"));
    }

    #[test]
    fn composed_factor_overflow_is_rejected() {
        let huge = Unit::try_multiplicative("huge", 1e200).unwrap();
        let err = Unit::try_scaled("huger", 1e200, huge).unwrap_err();
        assert!(matches!(err, Error::InvalidUnit(_)));
        assert!(Unit::try_scaled("ok", 1e100, huge).is_ok());
    }

    #[test]
    fn prefix_on_tiny_base_is_rejected() {
        let tiny = Unit::try_multiplicative("tiny", 1e-300).unwrap();
        let err = Unit::try_prefixed(Prefix::Yocto, tiny).unwrap_err();
        assert!(matches!(err, Error::InvalidUnit(_)));
        assert!(Unit::try_prefixed(Prefix::Kilo, tiny).is_ok());
    }

    #[test]
    #[should_panic(expected = "composed unit scale factor")]
    fn composed_factor_underflow_panics_eagerly() {
        let _ = Unit::scaled("tinier", 1e-200, Unit::multiplicative("tiny", 1e-200));
    }

    #[test]
    #[should_panic(expected = "prefixed unit scale factor")]
    fn prefixed_underflow_panics_eagerly() {
        let _ = Unit::prefixed(Prefix::Yocto, Unit::multiplicative("tiny", 1e-300));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality and display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_is_by_value() {
        let a = Unit::prefixed(Prefix::Kilo, Unit::reference("m"));
        let b = Unit::multiplicative("km", 1000.0);
        assert_eq!(a, KILOMETER);
        assert_eq!(a, b);
        assert_ne!(KILOMETER, CENTIMETER);
        assert_ne!(KELVIN, CELSIUS);
        assert_eq!(
            CELSIUS,
            Unit::functional("°C", |c| c + 273.15, |k| k - 273.15)
        );
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", CENTIMETER), "cm");
        let debug = format!("{:?}", CELSIUS);
        assert!(debug.contains("°C"));
        assert!(debug.contains("functional: true"));
    }

    proptest! {
        #[test]
        fn prop_multiplicative_round_trip(
            a in -1e9..1e9f64,
            prefix in prop::sample::select(Prefix::ALL.to_vec()),
        ) {
            let unit = Unit::prefixed(prefix, METER);
            let back = unit.from_reference(unit.to_reference(a));
            prop_assert!((back - a).abs() <= 1e-9 * a.abs().max(1.0));
        }

        #[test]
        fn prop_functional_round_trip(a in -1e6..1e6f64) {
            let back = CELSIUS.from_reference(CELSIUS.to_reference(a));
            prop_assert!((back - a).abs() < 1e-6);
        }
    }
}

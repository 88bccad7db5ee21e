//! Unit registry: symbol resolution and non-generic measures.
//!
//! The registry maps unit symbols to the units and quantities registered with it. Registration is
//! explicit: every quantity and unit is added through a [`RegistryBuilder`], and the standard
//! catalog is one such registration ([`register_standard`](crate::units::register_standard)).
//!
//! # Resolution order
//!
//! [`UnitRegistry::resolve`] tries, in order:
//!
//! 1. an exact, case-sensitive symbol match;
//! 2. a case-insensitive match, where the first registered unit wins (`"MM"` finds the
//!    millimetre even if a megametre is registered later);
//! 3. a case-insensitive alias.
//!
//! Unknown symbols fail with [`Error::UnitNotFound`].

use crate::error::{Error, Result};
use crate::units::register_standard;
use crate::{Measure, Quantity, QuantityKind, Unit};
use log::{info, warn};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::sync::OnceLock;

// =============================================================================
// Builder
// =============================================================================

/// Collects quantities, units and aliases for a [`UnitRegistry`].
///
/// Validation happens in [`RegistryBuilder::build`], so registrations can be chained freely.
///
/// ```rust
/// use metron_core::length::{Length, CENTIMETER, KILOMETER};
/// use metron_core::UnitRegistry;
///
/// let registry = UnitRegistry::builder()
///     .quantity::<Length>(&[KILOMETER, CENTIMETER])
///     .alias("metre", "m")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.resolve("KM").unwrap(), KILOMETER);
/// assert_eq!(registry.units_of::<Length>().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    kinds: Vec<QuantityKind>,
    units: Vec<Vec<Unit>>,
    aliases: Vec<(String, String)>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `Q` with its reference unit and `units`.
    ///
    /// Registering the same quantity or unit again is a no-op.
    pub fn quantity<Q: Quantity>(mut self, units: &[Unit]) -> Self {
        let index = match self.kinds.iter().position(|kind| kind.is::<Q>()) {
            Some(index) => index,
            None => {
                self.kinds.push(QuantityKind::of::<Q>());
                self.units.push(vec![Q::REFERENCE]);
                self.kinds.len() - 1
            }
        };

        let registered = &mut self.units[index];
        for unit in units {
            if !registered.contains(unit) {
                registered.push(*unit);
            }
        }
        self
    }

    /// Adds `alias` as an extra, case-insensitive name for the unit resolved by `symbol`.
    pub fn alias(mut self, alias: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), symbol.into()));
        self
    }

    /// Validates the registrations and builds the registry.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateSymbol`] if two different units claim the same symbol.
    /// - [`Error::DuplicateSymbol`] if an alias matches, ignoring case, the symbol of a different
    ///   unit.
    /// - [`Error::UnitNotFound`] if an alias points to a symbol that does not resolve.
    pub fn build(self) -> Result<UnitRegistry> {
        let mut exact: HashMap<String, Slot> = HashMap::new();
        let mut folded: HashMap<String, Slot> = HashMap::new();

        for (kind_index, units) in self.units.iter().enumerate() {
            for (unit_index, unit) in units.iter().enumerate() {
                let symbol = unit.symbol().into_owned();
                let slot = Slot {
                    kind: kind_index,
                    unit: unit_index,
                };

                if let Some(existing) = exact.get(&symbol) {
                    let existing = self.kinds[existing.kind].name();
                    let quantity = self.kinds[kind_index].name();
                    warn!(
                        "symbol '{}' of {} conflicts with a unit of {}",
                        symbol, quantity, existing
                    );
                    return Err(Error::DuplicateSymbol {
                        symbol,
                        existing,
                        quantity,
                    });
                }

                folded.entry(symbol.to_lowercase()).or_insert(slot);
                exact.insert(symbol, slot);
            }
        }

        let mut registry = UnitRegistry {
            kinds: self.kinds,
            units: self.units,
            exact,
            folded,
            aliases: HashMap::new(),
        };

        for (alias, symbol) in self.aliases {
            let slot = registry.lookup(&symbol)?;
            let alias = alias.to_lowercase();
            // Symbols resolve before aliases, so a shadowed alias would never be reached.
            if let Some(&shadowing) = registry.folded.get(&alias) {
                if shadowing != slot {
                    let existing = registry.kinds[shadowing.kind].name();
                    let quantity = registry.kinds[slot.kind].name();
                    warn!(
                        "alias '{}' for '{}' is shadowed by a unit of {}",
                        alias, symbol, existing
                    );
                    return Err(Error::DuplicateSymbol {
                        symbol: alias,
                        existing,
                        quantity,
                    });
                }
            }
            registry.aliases.insert(alias, slot);
        }

        Ok(registry)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Position of a unit inside the registry tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    kind: usize,
    unit: usize,
}

/// Resolves unit symbols to units and quantities.
///
/// Built once through [`UnitRegistry::builder`] and immutable afterwards, so a registry can be
/// shared between threads freely. [`UnitRegistry::standard`] returns the process-wide registry of
/// the standard catalog.
#[derive(Debug)]
pub struct UnitRegistry {
    kinds: Vec<QuantityKind>,
    units: Vec<Vec<Unit>>,
    exact: HashMap<String, Slot>,
    folded: HashMap<String, Slot>,
    aliases: HashMap<String, Slot>,
}

impl UnitRegistry {
    /// Starts an empty registration.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registry of the standard catalog, built on first access.
    ///
    /// # Errors
    ///
    /// Returns the build error if the standard catalog is inconsistent; the same error is
    /// returned on every call.
    pub fn standard() -> Result<&'static UnitRegistry> {
        static STANDARD: OnceLock<Result<UnitRegistry>> = OnceLock::new();

        STANDARD
            .get_or_init(|| {
                let registry = register_standard(UnitRegistry::builder()).build();
                if let Ok(registry) = &registry {
                    info!(
                        "Standard unit registry built: {} units across {} quantities",
                        registry.len(),
                        registry.kinds.len()
                    );
                }
                registry
            })
            .as_ref()
            .map_err(|err| err.clone())
    }

    /// Every registered quantity, in registration order.
    pub fn quantities(&self) -> &[QuantityKind] {
        &self.kinds
    }

    /// Units of `Q`, reference unit first. Empty when `Q` is not registered.
    pub fn units_of<Q: Quantity>(&self) -> &[Unit] {
        match self.kinds.iter().position(|kind| kind.is::<Q>()) {
            Some(index) => self.units[index].as_slice(),
            None => &[],
        }
    }

    /// Units of the quantity described by `kind`, reference unit first.
    pub fn units_of_kind(&self, kind: &QuantityKind) -> &[Unit] {
        match self.kinds.iter().position(|k| k == kind) {
            Some(index) => self.units[index].as_slice(),
            None => &[],
        }
    }

    /// Reference unit of `Q`, if `Q` is registered.
    pub fn reference_unit_of<Q: Quantity>(&self) -> Option<Unit> {
        self.units_of::<Q>().first().copied()
    }

    /// The quantity a symbol belongs to.
    pub fn kind_of(&self, symbol: &str) -> Result<QuantityKind> {
        self.lookup(symbol).map(|slot| self.kinds[slot.kind])
    }

    /// Total number of registered units.
    pub fn len(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Resolves a symbol or alias to its unit.
    ///
    /// ```rust
    /// use metron_core::length::CENTIMETER;
    /// use metron_core::{Error, UnitRegistry};
    ///
    /// let registry = UnitRegistry::standard().unwrap();
    /// assert_eq!(registry.resolve("cm").unwrap(), CENTIMETER);
    /// assert_eq!(registry.resolve("CM").unwrap(), CENTIMETER);
    /// assert!(matches!(registry.resolve("furlong"), Err(Error::UnitNotFound(_))));
    /// ```
    pub fn resolve(&self, symbol: &str) -> Result<Unit> {
        self.lookup(symbol).map(|slot| self.units[slot.kind][slot.unit])
    }

    /// A measure of whatever quantity `symbol` belongs to.
    pub fn measure_from(&self, amount: f64, symbol: &str) -> Result<AnyMeasure> {
        let slot = self.lookup(symbol)?;
        let unit = &self.units[slot.kind][slot.unit];
        Ok(AnyMeasure {
            kind: self.kinds[slot.kind],
            amount: unit.to_reference(amount),
        })
    }

    /// A measure of `Q` from an amount in the unit named by `symbol`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnitNotFound`] if the symbol does not resolve.
    /// - [`Error::InvalidCast`] if the unit belongs to a quantity whose dimension differs from
    ///   `Q`'s (differentiator included).
    pub fn measure_as<Q: Quantity>(&self, amount: f64, symbol: &str) -> Result<Measure<Q>> {
        self.measure_from(amount, symbol)?.try_into_measure()
    }

    /// Parses `"<amount> <symbol>"`, e.g. `"12.5 cm"` or `"-40 °F"`.
    ///
    /// ```rust
    /// use metron_core::length::Length;
    /// use metron_core::UnitRegistry;
    ///
    /// let registry = UnitRegistry::standard().unwrap();
    /// let m = registry.parse_measure("12.5 cm").unwrap();
    /// assert_eq!(m.kind().name(), "Length");
    /// assert_eq!(m.amount(), 0.125);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAmount`] if the amount is not a number.
    /// - [`Error::UnitNotFound`] if the symbol is missing or does not resolve.
    pub fn parse_measure(&self, text: &str) -> Result<AnyMeasure> {
        let text = text.trim();
        let (amount, symbol) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
        let amount: f64 = amount
            .parse()
            .map_err(|_| Error::InvalidAmount(amount.to_string()))?;
        self.measure_from(amount, symbol.trim())
    }

    fn lookup(&self, symbol: &str) -> Result<Slot> {
        if let Some(slot) = self.exact.get(symbol) {
            return Ok(*slot);
        }
        let folded = symbol.to_lowercase();
        self.folded
            .get(&folded)
            .or_else(|| self.aliases.get(&folded))
            .copied()
            .ok_or_else(|| Error::UnitNotFound(symbol.to_string()))
    }
}

// =============================================================================
// Non-generic measures
// =============================================================================

/// A measure whose quantity is only known at runtime.
///
/// Produced by symbol-based construction; [`AnyMeasure::try_into_measure`] recovers the typed
/// [`Measure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnyMeasure {
    kind: QuantityKind,
    amount: f64,
}

impl AnyMeasure {
    /// The quantity of this measure.
    pub fn kind(&self) -> &QuantityKind {
        &self.kind
    }

    /// Amount in the reference unit of [`AnyMeasure::kind`].
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Amount expressed in `unit`.
    pub fn amount_in(&self, unit: &Unit) -> f64 {
        unit.from_reference(self.amount)
    }

    /// The typed measure, when `Q` has exactly this measure's dimension.
    pub fn try_into_measure<Q: Quantity>(self) -> Result<Measure<Q>> {
        if !self.kind.matches::<Q>() {
            return Err(Error::InvalidCast {
                from: self.kind.name(),
                to: Q::NAME,
            });
        }
        Ok(Measure::new(self.amount))
    }
}

impl Display for AnyMeasure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.kind.reference_unit())
    }
}

// =============================================================================
// Standard-registry shortcuts
// =============================================================================

/// Resolves `symbol` in the [standard registry](UnitRegistry::standard).
pub fn resolve_unit(symbol: &str) -> Result<Unit> {
    UnitRegistry::standard()?.resolve(symbol)
}

/// [`UnitRegistry::measure_from`] on the standard registry.
pub fn measure_from(amount: f64, symbol: &str) -> Result<AnyMeasure> {
    UnitRegistry::standard()?.measure_from(amount, symbol)
}

/// [`UnitRegistry::measure_as`] on the standard registry.
///
/// ```rust
/// use metron_core::measure_as;
/// use metron_core::temperature::Temperature;
///
/// let t = measure_as::<Temperature>(0.0, "°C").unwrap();
/// assert_eq!(t.amount(), 273.15);
/// ```
pub fn measure_as<Q: Quantity>(amount: f64, symbol: &str) -> Result<Measure<Q>> {
    UnitRegistry::standard()?.measure_as(amount, symbol)
}

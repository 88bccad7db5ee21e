//! Error types for metron-core.

use crate::Dimension;
use thiserror::Error;

/// Result type for metron-core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by dimension checks, unit construction and symbol resolution.
///
/// None of these are recoverable inside the crate: they describe a call site wired to the wrong
/// quantity or unit, and are returned to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The dimension produced by an operation does not match the claimed quantity.
    #[error("dimension mismatch for {quantity}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Name of the claimed result quantity.
        quantity: &'static str,
        /// Dimension of the claimed quantity.
        expected: Dimension,
        /// Dimension actually produced by the operands.
        actual: Dimension,
    },

    /// No registered unit matches the symbol.
    #[error("unit not found: {0}")]
    UnitNotFound(String),

    /// A non-generic measure does not belong to the requested quantity.
    #[error("cannot cast a {from} measure to {to}")]
    InvalidCast {
        /// Quantity the measure was resolved to.
        from: &'static str,
        /// Quantity requested by the caller.
        to: &'static str,
    },

    /// A unit was constructed from invalid arguments.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    /// Amount text could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Two different units claim the same symbol.
    #[error("symbol '{symbol}' of {quantity} is already registered by {existing}")]
    DuplicateSymbol {
        /// The contested symbol.
        symbol: String,
        /// Quantity that registered the symbol first.
        existing: &'static str,
        /// Quantity attempting to register it again.
        quantity: &'static str,
    },

    /// The prime sequence backing dimensionless differentiators ran past its ceiling.
    #[error("no prime differentiator left below {limit}")]
    PrimesExhausted {
        /// The exclusive ceiling of the sequence.
        limit: u64,
    },
}

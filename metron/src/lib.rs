//! Strongly typed physical quantities with dimension-checked arithmetic.
//!
//! `metron` is the user-facing crate in this workspace. It re-exports the full API from
//! `metron-core` (dimensions, units, measures, checked arithmetic, the unit registry and the
//! standard catalog) and adds TOML configuration of the registry in [`config`].
//!
//! The core idea is: a value is always a `Measure<Q>`, where `Q` is a zero-sized type describing
//! the quantity. The amount is stored in `Q`'s reference unit, and any product, quotient or power
//! has to name the quantity it produces, which is checked against the operands' dimensions.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible quantities (you can't add metres to seconds).
//! - Rejects products and quotients that do not produce the claimed quantity.
//! - Keeps dimensionless quantities (angles, refractive indices, plain numbers) apart.
//! - Resolves unit symbols such as `"cm"` or `"°C"` at runtime.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or automatic simplification of unit expressions.
//! - Exact arithmetic: measures are backed by `f64`.
//! - Serialization of measures.
//!
//! # Quick start
//!
//! Convert between units:
//!
//! ```rust
//! use metron::Measure;
//! use metron::temperature::{Temperature, CELSIUS, KELVIN};
//!
//! let t = Measure::<Temperature>::in_unit(0.0, &CELSIUS);
//! assert_eq!(t.amount_in(&KELVIN), 273.15);
//! ```
//!
//! Combine quantities (volume = area × length):
//!
//! ```rust
//! use metron::area::Area;
//! use metron::length::Length;
//! use metron::volume::Volume;
//! use metron::{times, Error, Measure};
//!
//! let v = times::<Volume, _, _>(Measure::<Area>::new(2.0), Measure::<Length>::new(3.0)).unwrap();
//! assert_eq!(v.amount(), 6.0);
//!
//! let wrong = times::<Volume, _, _>(Measure::<Area>::new(2.0), Measure::<Area>::new(3.0));
//! assert!(matches!(wrong, Err(Error::DimensionMismatch { .. })));
//! ```
//!
//! Resolve units by symbol:
//!
//! ```rust
//! use metron::length::Length;
//! use metron::UnitRegistry;
//!
//! let registry = UnitRegistry::standard().unwrap();
//! let d = registry.parse_measure("12.5 cm").unwrap();
//! assert_eq!(d.try_into_measure::<Length>().unwrap().amount(), 0.125);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use metron::Measure;
//! use metron::length::Length;
//! use metron::time::Time;
//!
//! let d = Measure::<Length>::new(1.0);
//! let t = Measure::<Time>::new(1.0);
//! let _ = d + t; // cannot add different quantities
//! ```
//!
//! # Modules
//!
//! Quantities and units are grouped by domain (re-exported from `metron-core`):
//!
//! - `metron::length`, `metron::mass`, `metron::time`, `metron::temperature`
//! - `metron::electric`, `metron::photometry`, `metron::substance`
//! - `metron::area`, `metron::volume`, `metron::mechanics`
//! - `metron::angle`, `metron::dimensionless`
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with [`Error`]; configuration loading returns
//! [`ConfigError`]. Amount arithmetic is pure `f64` and follows IEEE-754 behavior.
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade; install any logger to see them. Nothing is logged
//! on the conversion hot path.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use metron_core::*;

pub use metron_core::arithmetic::{divide, power, product, times};

/// Derive macro used by `metron-core` to define quantity marker types.
///
/// This macro expands in terms of `crate::Quantity`, `crate::Unit` and `crate::Dimension`, so it is
/// intended for use inside `metron-core` (or crates exposing the same crate-root API). Most users
/// implement [`Quantity`] by hand instead.
pub use metron_derive::Quantity;

pub mod config;

pub use config::{ConfigError, RegistryConfig};

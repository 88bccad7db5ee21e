//! Prime differentiators for dimensionless quantities.
//!
//! Every named dimensionless quantity (plane angle, refractive index, relative density, …) is
//! tagged with its own prime. Because primes have unique factorizations, the product of any two
//! tags can never equal a third tag, so multiplying unrelated dimensionless quantities cannot
//! collapse into an already meaningful one. Composite quantities such as the solid angle reuse an
//! existing tag through [`Dimension::power`] instead of drawing a new prime.
//!
//! The assignment is process-wide through [`DifferentiatorRegistry::global`], which is created
//! once and never torn down. Isolated registries can be created with
//! [`DifferentiatorRegistry::new`] for tests or embedding.

use crate::error::{Error, Result};
use crate::Dimension;
use log::debug;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Largest integer an `f64` differentiator represents exactly (`2^53`).
pub const DEFAULT_PRIME_LIMIT: u64 = 1 << 53;

/// Unbounded-in-spirit prime generator, bounded in practice by an exclusive ceiling.
///
/// Candidates are tested by trial division against the primes found so far.
#[derive(Debug, Clone)]
pub struct PrimeSequence {
    found: Vec<u64>,
    limit: u64,
}

impl PrimeSequence {
    /// A sequence bounded by [`DEFAULT_PRIME_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_PRIME_LIMIT)
    }

    /// A sequence that never yields a prime `>= limit`.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            found: Vec::new(),
            limit,
        }
    }

    /// The exclusive ceiling of this sequence.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the next prime, or [`Error::PrimesExhausted`] once the ceiling is reached.
    pub fn next_prime(&mut self) -> Result<u64> {
        let exhausted = Error::PrimesExhausted { limit: self.limit };
        let mut candidate = match self.found.last() {
            None => 2,
            Some(2) => 3,
            Some(&last) => last.checked_add(2).ok_or_else(|| exhausted.clone())?,
        };
        loop {
            if candidate >= self.limit {
                return Err(exhausted);
            }
            let is_prime = self
                .found
                .iter()
                .take_while(|&&p| p.saturating_mul(p) <= candidate)
                .all(|&p| candidate % p != 0);
            if is_prime {
                self.found.push(candidate);
                return Ok(candidate);
            }
            candidate = candidate.checked_add(2).ok_or_else(|| exhausted.clone())?;
        }
    }
}

impl Default for PrimeSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct State {
    primes: PrimeSequence,
    assigned: HashMap<String, u64>,
}

/// Assigns each named dimensionless quantity a distinct prime differentiator.
///
/// Assignments are idempotent and permanent for the lifetime of the registry.
///
/// ```rust
/// use metron_core::DifferentiatorRegistry;
///
/// let registry = DifferentiatorRegistry::new();
/// let angle = registry.assign("plane angle").unwrap();
/// let index = registry.assign("refractive index").unwrap();
/// assert_ne!(angle, index);
/// assert_eq!(registry.assign("plane angle").unwrap(), angle);
/// ```
#[derive(Debug)]
pub struct DifferentiatorRegistry {
    state: Mutex<State>,
}

impl DifferentiatorRegistry {
    /// A fresh registry drawing from a default [`PrimeSequence`].
    pub fn new() -> Self {
        Self::with_sequence(PrimeSequence::new())
    }

    /// A fresh registry whose primes stay below `limit`.
    pub fn with_limit(limit: u64) -> Self {
        Self::with_sequence(PrimeSequence::with_limit(limit))
    }

    fn with_sequence(primes: PrimeSequence) -> Self {
        Self {
            state: Mutex::new(State {
                primes,
                assigned: HashMap::new(),
            }),
        }
    }

    /// The process-wide registry used by the built-in quantities.
    pub fn global() -> &'static DifferentiatorRegistry {
        static GLOBAL: OnceLock<DifferentiatorRegistry> = OnceLock::new();
        GLOBAL.get_or_init(DifferentiatorRegistry::new)
    }

    // A poisoned lock only means another thread panicked mid-assignment; the map itself is
    // never left half-written.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Pulls the next unused prime without binding it to a name.
    pub fn next(&self) -> Result<u64> {
        self.lock().primes.next_prime()
    }

    /// Returns the differentiator bound to `name`, drawing a fresh prime on first use.
    pub fn assign(&self, name: &str) -> Result<f64> {
        let mut state = self.lock();
        if let Some(&prime) = state.assigned.get(name) {
            return Ok(prime as f64);
        }
        let prime = state.primes.next_prime()?;
        state.assigned.insert(name.to_owned(), prime);
        debug!("assigned differentiator {} to dimensionless quantity '{}'", prime, name);
        Ok(prime as f64)
    }

    /// The dimensionless [`Dimension`] tagged for `name`.
    pub fn dimension_of(&self, name: &str) -> Result<Dimension> {
        self.assign(name).map(Dimension::dimensionless)
    }

    /// Number of names bound so far.
    pub fn len(&self) -> usize {
        self.lock().assigned.len()
    }

    /// `true` when no name has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DifferentiatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Dimension of a built-in named dimensionless quantity, drawn from the global registry.
///
/// # Panics
///
/// Panics if the global prime sequence is exhausted, which would require more than
/// `2^53 / ln(2^53)` distinct dimensionless quantities.
pub fn named_dimensionless(name: &str) -> Dimension {
    match DifferentiatorRegistry::global().dimension_of(name) {
        Ok(dimension) => dimension,
        Err(err) => panic!("cannot define dimensionless quantity '{}': {}", name, err),
    }
}

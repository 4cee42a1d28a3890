//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent
//! individuals in the evolutionary search. The breeding strategy only ever
//! talks to candidates through it, so the generational loop does not need to
//! know how a layout is encoded.
//!
//! ## Example
//!
//! ```rust
//! use facility_layout::error::Result;
//! use facility_layout::phenotype::Phenotype;
//! use facility_layout::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Pair(usize, usize);
//!
//! impl Phenotype for Pair {
//!     fn crossover(&self, other: &Self, _rng: &mut RandomNumberGenerator) -> Result<(Self, Self)> {
//!         Ok((Pair(self.0, other.1), Pair(other.0, self.1)))
//!     }
//!
//!     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) -> Result<()> {
//!         std::mem::swap(&mut self.0, &mut self.1);
//!         Ok(())
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`
/// and `Sync` so populations can be copied, logged and scored in parallel.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Recombines `self` with `other` and returns two fresh children.
    ///
    /// Neither parent is modified. Implementations must keep whatever validity
    /// invariant the encoding carries (for orderings: both children are
    /// permutations of the parents' element set).
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<(Self, Self)>;

    /// Applies a small random perturbation in place.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator) -> Result<()>;
}

//! # StationOrdering
//!
//! A candidate layout: every station index in `0..N` exactly once, read left
//! to right along the line.

use std::fmt;

use crate::error::Result;
use crate::operators::{one_point_order_crossover, swap_mutation};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StationOrdering {
    stations: Vec<usize>,
}

impl StationOrdering {
    /// The ordering `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            stations: (0..n).collect(),
        }
    }

    /// Wraps a gene vector without checking it. Use [`is_permutation`](Self::is_permutation)
    /// when the source is untrusted.
    pub fn from_stations(stations: Vec<usize>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[usize] {
        &self.stations
    }

    pub fn into_stations(self) -> Vec<usize> {
        self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.stations)
    }
}

impl AsRef<[usize]> for StationOrdering {
    fn as_ref(&self) -> &[usize] {
        &self.stations
    }
}

impl fmt::Display for StationOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.stations)
    }
}

impl Phenotype for StationOrdering {
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<(Self, Self)> {
        let (a, b) = one_point_order_crossover(&self.stations, &other.stations, rng)?;
        Ok((Self::from_stations(a), Self::from_stations(b)))
    }

    fn mutate(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        swap_mutation(&mut self.stations, rng)
    }
}

/// Returns `true` if `genes` contains each of `0..genes.len()` exactly once.
pub fn is_permutation(genes: &[usize]) -> bool {
    let mut seen = vec![false; genes.len()];
    for &gene in genes {
        match seen.get_mut(gene) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

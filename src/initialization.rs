//! # Initializers
//!
//! An [`Initializer`] produces the first population. Two are provided:
//!
//! - [`IdenticalInitializer`] fills the population with copies of the identity
//!   ordering. It draws no random numbers, so all diversity comes from
//!   selection, crossover and mutation. This reproduces the reference results
//!   and is the default.
//! - [`ShuffledInitializer`] gives every candidate its own uniformly shuffled
//!   ordering.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::ordering::StationOrdering;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

pub trait Initializer<P: Phenotype>: Debug + Send + Sync {
    /// Generates `population_size` candidates over `num_genes` genes.
    fn generate(
        &self,
        num_genes: usize,
        population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct IdenticalInitializer;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffledInitializer;

impl Initializer<StationOrdering> for IdenticalInitializer {
    fn generate(
        &self,
        num_genes: usize,
        population_size: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<StationOrdering>> {
        check_size(population_size)?;
        Ok(vec![StationOrdering::identity(num_genes); population_size])
    }
}

impl Initializer<StationOrdering> for ShuffledInitializer {
    fn generate(
        &self,
        num_genes: usize,
        population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<StationOrdering>> {
        check_size(population_size)?;
        Ok((0..population_size)
            .map(|_| {
                let mut stations: Vec<usize> = (0..num_genes).collect();
                rng.shuffle(&mut stations);
                StationOrdering::from_stations(stations)
            })
            .collect())
    }
}

fn check_size(population_size: usize) -> Result<()> {
    if population_size == 0 {
        return Err(GeneticError::Configuration(
            "Population size cannot be zero".to_string(),
        ));
    }
    Ok(())
}

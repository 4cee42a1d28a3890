//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines how one generation's population and its
//! costs turn into the next generation's population.
pub mod generational;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Produces the next population from `population` and its parallel
    /// `fitness` vector.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty or its fitness vector has the wrong length
    /// - The population is too small for the parent selection
    /// - A crossover or mutation operator rejects its input
    fn breed(
        &self,
        population: &[Pheno],
        fitness: &[f64],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;

    /// Smallest population the strategy can breed from.
    fn min_population(&self) -> usize {
        1
    }

    /// Tournament size the strategy selects parents with, if it runs
    /// tournaments. The launcher requires it to agree with
    /// [`EvolutionOptions::get_tournament_size`].
    fn tournament_size(&self) -> Option<usize> {
        None
    }
}

pub use generational::GenerationalStrategy;

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// Fitness values are costs: lower is better. Selected individuals are owned
/// clones, so callers may mutate them without touching the source population.
///
/// # Examples
///
/// ```
/// use facility_layout::ordering::StationOrdering;
/// use facility_layout::rng::RandomNumberGenerator;
/// use facility_layout::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     StationOrdering::from_stations(vec![0, 1, 2]),
///     StationOrdering::from_stations(vec![2, 1, 0]),
///     StationOrdering::from_stations(vec![1, 0, 2]),
/// ];
/// let fitness = vec![4.0, 1.0, 9.0];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// // A tournament over the whole population always finds the cheapest layout.
/// let selection = TournamentSelection::new(3).unwrap();
/// let parents = selection.select(&population, &fitness, 2, &mut rng).unwrap();
/// assert!(parents.iter().all(|p| p.stations() == [2, 1, 0]));
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Phenotype,
{
    /// Selects `num_to_select` individuals (repeats allowed).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The population is too small for the strategy
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;

    /// Smallest population the strategy can select from.
    fn min_population(&self) -> usize {
        1
    }

    /// Number of candidates drawn per tournament, for tournament-based
    /// strategies.
    fn tournament_size(&self) -> Option<usize> {
        None
    }
}

pub(crate) fn check_population<P>(population: &[P], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}

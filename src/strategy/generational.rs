//! # GenerationalStrategy
//!
//! Full generational replacement without elitism. Until the new population is
//! as large as the old one, two parents are picked by the selection strategy,
//! crossed over with the configured probability (otherwise copied as they are)
//! and each child is mutated independently with the configured probability.
//! Children are appended in pairs, so an odd target is overshot by one unless
//! [`PopulationSizing::Truncate`] is set.

use crate::error::{GeneticError, Result};
use crate::evolution::options::{EvolutionOptions, PopulationSizing};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::{SelectionStrategy, TournamentSelection};
use crate::strategy::BreedStrategy;

#[derive(Debug, Clone)]
pub struct GenerationalStrategy<S> {
    selection: S,
}

impl<S> GenerationalStrategy<S> {
    pub fn new(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }
}

impl GenerationalStrategy<TournamentSelection> {
    /// Tournament-based strategy sized from `options`.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        Ok(Self::new(TournamentSelection::new(
            options.get_tournament_size(),
        )?))
    }
}

impl Default for GenerationalStrategy<TournamentSelection> {
    fn default() -> Self {
        Self::new(TournamentSelection::default())
    }
}

impl<P, S> BreedStrategy<P> for GenerationalStrategy<S>
where
    P: Phenotype,
    S: SelectionStrategy<P> + Clone,
{
    fn breed(
        &self,
        population: &[P],
        fitness: &[f64],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let target = population.len();
        let crossover_probability = evol_options.get_crossover_probability();
        let mutation_probability = evol_options.get_mutation_probability();

        let mut offspring = Vec::with_capacity(target + 1);
        while offspring.len() < target {
            let mut parents = self.selection.select(population, fitness, 2, rng)?;
            let (parent1, parent2) = match (parents.pop(), parents.pop()) {
                (Some(second), Some(first)) => (first, second),
                _ => {
                    return Err(GeneticError::Evolution(
                        "Selection returned fewer than two parents".to_string(),
                    ))
                }
            };

            let (mut child1, mut child2) = if rng.coin(crossover_probability) {
                parent1.crossover(&parent2, rng)?
            } else {
                (parent1, parent2)
            };

            if rng.coin(mutation_probability) {
                child1.mutate(rng)?;
            }
            offspring.push(child1);

            if rng.coin(mutation_probability) {
                child2.mutate(rng)?;
            }
            offspring.push(child2);
        }

        if evol_options.get_population_sizing() == PopulationSizing::Truncate {
            offspring.truncate(target);
        }

        Ok(offspring)
    }

    fn min_population(&self) -> usize {
        self.selection.min_population()
    }

    fn tournament_size(&self) -> Option<usize> {
        SelectionStrategy::<P>::tournament_size(&self.selection)
    }
}

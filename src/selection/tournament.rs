use crate::error::{GeneticError, Result};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// Tournament selection for minimisation.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly
/// without replacement and returns a copy of the one with the lowest cost.
/// Ties go to the individual drawn first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs one tournament and returns an owned copy of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, the fitness length does not
    /// match, or the tournament is larger than the population.
    pub fn select_one<P: Phenotype>(
        &self,
        population: &[P],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<P> {
        check_population(population, fitness)?;
        let winner = self.run_tournament(fitness, rng)?;
        Ok(population[winner].clone())
    }

    /// Returns the index of the tournament winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        let population_size = fitness.len();
        if self.tournament_size > population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size, population_size
            )));
        }

        let participants = rng.sample_distinct(population_size, self.tournament_size);

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if fitness[idx] < fitness[best_idx] {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: crate::evolution::options::DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl<P> SelectionStrategy<P> for TournamentSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        check_population(population, fitness)?;

        let mut selected = Vec::with_capacity(num_to_select);
        for _ in 0..num_to_select {
            let winner_idx = self.run_tournament(fitness, rng)?;
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }

    fn min_population(&self) -> usize {
        self.tournament_size
    }

    fn tournament_size(&self) -> Option<usize> {
        Some(self.tournament_size)
    }
}

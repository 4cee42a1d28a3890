use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, info, info_span, trace};

use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    initialization::Initializer,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    strategy::BreedStrategy,
};

/// Best candidate of the final population and its cost.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The evolved phenotype.
    pub pheno: Pheno,
    /// Its cost. Lower is better.
    pub score: f64,
    /// Number of generations that were run.
    pub generations: usize,
}

/// Runs the generational loop: initialise, then evaluate, breed and replace
/// for a fixed number of generations, then pick the cheapest survivor.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Strategy, Chall, Init>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
    Init: Initializer<Pheno>,
{
    strategy: Strategy,
    challenge: Chall,
    initializer: Init,
    _marker: PhantomData<Pheno>,
}

impl<Pheno, Strategy, Chall, Init> EvolutionLauncher<Pheno, Strategy, Chall, Init>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno> + Sync,
    Strategy: BreedStrategy<Pheno>,
    Init: Initializer<Pheno>,
{
    /// Creates a new `EvolutionLauncher` from its three collaborators.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Produces each next generation from the current one.
    /// * `challenge` - Scores candidates; lower is better.
    /// * `initializer` - Produces the first generation.
    pub fn new(strategy: Strategy, challenge: Chall, initializer: Init) -> Self {
        Self {
            strategy,
            challenge,
            initializer,
            _marker: PhantomData,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a population of `num_genes`-gene candidates.
    ///
    /// The population size is `options.population_size_for(num_genes)`. Every
    /// generation is scored from scratch and replaced wholesale by its
    /// offspring; nothing is carried over. After the last generation the final
    /// population is scored and its cheapest member is returned.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are out of range
    /// - `num_genes` is below two or differs from the challenge's dimension
    /// - The population size is zero or smaller than the breeding strategy needs
    /// - Any candidate scores NaN or infinity
    /// - Breeding fails
    ///
    /// # Performance
    ///
    /// Fitness is evaluated with Rayon when the population reaches the
    /// options' parallel threshold. Scoring draws no random numbers, so a
    /// seeded run gives the same result on either path.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        num_genes: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Pheno>> {
        let population_size = self.validate(options, num_genes)?;

        let span = info_span!("evolve", stations = num_genes, population = population_size);
        let _guard = span.enter();
        info!(
            generations = options.get_num_generations(),
            "starting evolution"
        );

        let mut population = self
            .initializer
            .generate(num_genes, population_size, rng)?;

        for generation in 0..options.get_num_generations() {
            let fitness = self.evaluate(&population, options)?;
            self.log_generation(options.get_log_level(), generation, &population, &fitness);

            population = self
                .strategy
                .breed(&population, &fitness, options, rng)
                .map_err(|e| match e {
                    GeneticError::Breeding(msg) => GeneticError::Breeding(format!(
                        "Failed to breed candidates in generation {}: {}",
                        generation, msg
                    )),
                    other => other,
                })?;
        }

        let fitness = self.evaluate(&population, options)?;
        let best = best_index(&fitness).ok_or_else_genetic(|| {
            GeneticError::Evolution(
                "Evolution completed but no viable candidates were produced".to_string(),
            )
        })?;

        let result = EvolutionResult {
            pheno: population.swap_remove(best),
            score: fitness[best],
            generations: options.get_num_generations(),
        };
        info!(score = result.score, "evolution finished");
        Ok(result)
    }

    /// Checks everything that must hold before the first generation and
    /// returns the population size.
    fn validate(&self, options: &EvolutionOptions, num_genes: usize) -> Result<usize> {
        options.validate()?;

        if num_genes < 2 {
            return Err(GeneticError::Configuration(format!(
                "At least two genes are required, got {}",
                num_genes
            )));
        }

        if let Some(expected) = self.challenge.dimension() {
            if expected != num_genes {
                return Err(GeneticError::Configuration(format!(
                    "Challenge expects {} genes, got {}",
                    expected, num_genes
                )));
            }
        }

        if let Some(tournament_size) = self.strategy.tournament_size() {
            if tournament_size != options.get_tournament_size() {
                return Err(GeneticError::Configuration(format!(
                    "Breed strategy runs tournaments of {} but the options ask for {}",
                    tournament_size,
                    options.get_tournament_size()
                )));
            }
        }

        let population_size = options.population_size_for(num_genes);
        if population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let required = self.strategy.min_population();
        if population_size < required {
            return Err(GeneticError::Configuration(format!(
                "Population size ({}) is smaller than the selection needs ({})",
                population_size, required
            )));
        }

        Ok(population_size)
    }

    /// Scores every candidate, in parallel above the options' threshold.
    fn evaluate(&self, population: &[Pheno], options: &EvolutionOptions) -> Result<Vec<f64>> {
        let check = |score: f64| {
            if score.is_finite() {
                Ok(score)
            } else {
                Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )))
            }
        };

        if population.len() >= options.get_parallel_threshold() {
            population
                .par_iter()
                .map(|candidate| check(self.challenge.score(candidate)))
                .collect()
        } else {
            population
                .iter()
                .map(|candidate| check(self.challenge.score(candidate)))
                .collect()
        }
    }

    fn log_generation(
        &self,
        log_level: LogLevel,
        generation: usize,
        population: &[Pheno],
        fitness: &[f64],
    ) {
        if log_level == LogLevel::None {
            return;
        }

        let best = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;
        debug!(generation, best, mean, size = population.len(), "generation evaluated");

        if log_level == LogLevel::Verbose {
            for (candidate, score) in population.iter().zip(fitness) {
                trace!(generation, score, candidate = ?candidate);
            }
        }
    }
}

/// Index of the lowest cost; ties go to the earliest index.
fn best_index(fitness: &[f64]) -> Option<usize> {
    fitness
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &score)| match best {
            Some((_, lowest)) if lowest <= score => best,
            _ => Some((i, score)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::effort::EffortChallenge;
    use crate::evolution::options::PopulationSizing;
    use crate::initialization::{IdenticalInitializer, ShuffledInitializer};
    use crate::ordering::StationOrdering;
    use crate::problem::LayoutProblem;
    use crate::selection::TournamentSelection;
    use crate::strategy::GenerationalStrategy;

    type Launcher<I> =
        EvolutionLauncher<StationOrdering, GenerationalStrategy<TournamentSelection>, EffortChallenge, I>;

    fn challenge(n: usize) -> EffortChallenge {
        let sizes = (0..n).map(|i| (i % 3 + 1) as f64).collect();
        let preferences = (0..n)
            .map(|i| (0..n).map(|j| ((i + 2 * j) % 4) as f64).collect())
            .collect();
        EffortChallenge::new(LayoutProblem::new(sizes, preferences).unwrap())
    }

    fn launcher<I: Initializer<StationOrdering>>(n: usize, initializer: I) -> Launcher<I> {
        EvolutionLauncher::new(GenerationalStrategy::default(), challenge(n), initializer)
    }

    #[test]
    fn test_best_index_prefers_first_minimum() {
        assert_eq!(best_index(&[3.0, 1.0, 2.0, 1.0]), Some(1));
        assert_eq!(best_index(&[]), None);
    }

    #[test]
    fn test_result_is_cheapest_final_candidate() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let launcher = launcher(10, ShuffledInitializer);
        let options = EvolutionOptions::builder().num_generations(20).build().unwrap();

        let result = launcher.evolve(&options, 10, &mut rng).unwrap();

        assert!(result.pheno.is_permutation());
        assert_eq!(result.score, launcher.challenge().score(&result.pheno));
        assert_eq!(result.generations, 20);
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let launcher = launcher(6, IdenticalInitializer);
        let options = EvolutionOptions::builder().num_generations(0).build().unwrap();

        let result = launcher.evolve(&options, 6, &mut rng).unwrap();

        assert_eq!(result.pheno, StationOrdering::identity(6));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let options = EvolutionOptions::builder().num_generations(15).build().unwrap();
        let launcher = launcher(12, IdenticalInitializer);

        let a = launcher
            .evolve(&options, 12, &mut RandomNumberGenerator::from_seed(99))
            .unwrap();
        let b = launcher
            .evolve(&options, 12, &mut RandomNumberGenerator::from_seed(99))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_evaluation_matches_sequential() {
        let sequential = EvolutionOptions::builder()
            .num_generations(10)
            .population_fraction(1.0)
            .build()
            .unwrap();
        let mut parallel = sequential.clone();
        parallel.set_parallel_threshold(1);

        let launcher = launcher(16, ShuffledInitializer);
        let a = launcher
            .evolve(&sequential, 16, &mut RandomNumberGenerator::from_seed(5))
            .unwrap();
        let b = launcher
            .evolve(&parallel, 16, &mut RandomNumberGenerator::from_seed(5))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_too_few_genes() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let launcher = launcher(2, IdenticalInitializer);
        let result = launcher.evolve(&EvolutionOptions::default(), 1, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let launcher = launcher(8, IdenticalInitializer);
        let result = launcher.evolve(&EvolutionOptions::default(), 10, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_rejects_population_smaller_than_tournament() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        // Five stations give a population of two, below the tournament of three.
        let launcher = launcher(5, IdenticalInitializer);
        let result = launcher.evolve(&EvolutionOptions::default(), 5, &mut rng);

        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("smaller than the selection needs"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_tournament_size_disagreeing_with_strategy() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let launcher = launcher(5, IdenticalInitializer);
        let options = EvolutionOptions::builder().tournament_size(2).build().unwrap();

        match launcher.evolve(&options, 5, &mut rng) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("tournaments of 3 but the options ask for 2"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_tournament_size_from_options_is_used() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let options = EvolutionOptions::builder().tournament_size(2).build().unwrap();
        let launcher: Launcher<IdenticalInitializer> = EvolutionLauncher::new(
            GenerationalStrategy::from_options(&options).unwrap(),
            challenge(5),
            IdenticalInitializer,
        );

        // Five stations give a population of two, enough for tournaments of two.
        let result = launcher.evolve(&options, 5, &mut rng).unwrap();
        assert!(result.pheno.is_permutation());
    }

    #[test]
    fn test_rejects_invalid_options() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let launcher = launcher(8, IdenticalInitializer);
        let mut options = EvolutionOptions::default();
        options.set_mutation_probability(3.0);

        assert!(launcher.evolve(&options, 8, &mut rng).is_err());
    }

    #[test]
    fn test_overshoot_grows_odd_population_once() {
        #[derive(Debug, Clone)]
        struct SizeRecorder(std::sync::Arc<std::sync::Mutex<Vec<usize>>>);

        impl BreedStrategy<StationOrdering> for SizeRecorder {
            fn breed(
                &self,
                population: &[StationOrdering],
                fitness: &[f64],
                evol_options: &EvolutionOptions,
                rng: &mut RandomNumberGenerator,
            ) -> Result<Vec<StationOrdering>> {
                self.0.lock().unwrap().push(population.len());
                GenerationalStrategy::<TournamentSelection>::default()
                    .breed(population, fitness, evol_options, rng)
            }

            fn min_population(&self) -> usize {
                3
            }
        }

        for (sizing, expected) in [
            (PopulationSizing::AllowOvershoot, vec![7, 8, 8, 8]),
            (PopulationSizing::Truncate, vec![7, 7, 7, 7]),
        ] {
            let sizes = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
            let launcher: EvolutionLauncher<StationOrdering, _, _, _> = EvolutionLauncher::new(
                SizeRecorder(sizes.clone()),
                challenge(14),
                IdenticalInitializer,
            );
            let options = EvolutionOptions::builder()
                .num_generations(4)
                .population_sizing(sizing)
                .build()
                .unwrap();

            launcher
                .evolve(&options, 14, &mut RandomNumberGenerator::from_seed(3))
                .unwrap();

            assert_eq!(*sizes.lock().unwrap(), expected);
        }
    }
}

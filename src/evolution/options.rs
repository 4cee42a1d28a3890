//! # EvolutionOptions
//!
//! The tunables of a layout run: generation count, operator probabilities,
//! tournament size, how large the population is relative to the number of
//! stations, and what happens when an odd population would be overshot.
//!
//! ## Example
//!
//! ```rust
//! use facility_layout::evolution::options::{EvolutionOptions, LogLevel, PopulationSizing};
//!
//! // The reference parameters
//! let defaults = EvolutionOptions::default();
//! assert_eq!(defaults.get_num_generations(), 100);
//!
//! // A custom run
//! let options = EvolutionOptions::builder()
//!     .num_generations(250)
//!     .crossover_probability(0.8)
//!     .population_sizing(PopulationSizing::Truncate)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.population_size_for(10), 5);
//! ```

use crate::error::{GeneticError, Result};

/// How much the evolution loop reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-generation summaries plus every candidate and its cost.
    Verbose,
    /// Per-generation summaries.
    Minimal,
    /// Only the start and end of a run.
    None,
}

/// What to do when two children per reproduction step would overshoot an odd
/// target population size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationSizing {
    /// Keep the surplus child. An odd population grows by one in the first
    /// generation and stays at that even size afterwards.
    AllowOvershoot,
    /// Drop the surplus child so every generation has exactly the initial size.
    Truncate,
}

pub const DEFAULT_NUM_GENERATIONS: usize = 100;
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.4;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.3;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;
pub const DEFAULT_POPULATION_FRACTION: f64 = 0.5;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    crossover_probability: f64,
    mutation_probability: f64,
    tournament_size: usize,
    population_fraction: f64,
    population_sizing: PopulationSizing,
    /// Minimum number of candidates before fitness is evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_population_fraction(&self) -> f64 {
        self.population_fraction
    }

    pub fn get_population_sizing(&self) -> PopulationSizing {
        self.population_sizing
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_crossover_probability(&mut self, p: f64) {
        self.crossover_probability = p;
    }

    pub fn set_mutation_probability(&mut self, p: f64) {
        self.mutation_probability = p;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_population_fraction(&mut self, fraction: f64) {
        self.population_fraction = fraction;
    }

    pub fn set_population_sizing(&mut self, sizing: PopulationSizing) {
        self.population_sizing = sizing;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Population size for a problem with `num_stations` stations:
    /// `floor(num_stations * population_fraction)`.
    pub fn population_size_for(&self, num_stations: usize) -> usize {
        (num_stations as f64 * self.population_fraction).floor() as usize
    }

    /// Checks value ranges. Setters do not validate, so the launcher calls
    /// this again before a run.
    pub fn validate(&self) -> Result<()> {
        check_probability("Crossover probability", self.crossover_probability)?;
        check_probability("Mutation probability", self.mutation_probability)?;

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if !self.population_fraction.is_finite()
            || self.population_fraction <= 0.0
            || self.population_fraction > 1.0
        {
            return Err(GeneticError::Configuration(format!(
                "Population fraction must lie in (0, 1], got {}",
                self.population_fraction
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GeneticError::Configuration(format!(
            "{} must lie in [0, 1], got {}",
            name, p
        )));
    }
    Ok(())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_NUM_GENERATIONS,
            log_level: LogLevel::None,
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            population_fraction: DEFAULT_POPULATION_FRACTION,
            population_sizing: PopulationSizing::AllowOvershoot,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    tournament_size: Option<usize>,
    population_fraction: Option<f64>,
    population_sizing: Option<PopulationSizing>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn population_fraction(mut self, value: f64) -> Self {
        self.population_fraction = Some(value);
        self
    }

    pub fn population_sizing(mut self, value: PopulationSizing) -> Self {
        self.population_sizing = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let default = EvolutionOptions::default();
        let options = EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            log_level: self.log_level.unwrap_or(default.log_level),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(default.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(default.mutation_probability),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            population_fraction: self
                .population_fraction
                .unwrap_or(default.population_fraction),
            population_sizing: self.population_sizing.unwrap_or(default.population_sizing),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
        };
        options.validate()?;
        Ok(options)
    }
}

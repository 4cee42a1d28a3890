//! Single-row facility layout with a permutation genetic algorithm.
//!
//! Stations of known width are placed side by side along a line. A
//! preference matrix weighs how much each pair interacts, and the search looks
//! for the ordering with the lowest total weighted centre-to-centre distance.
//!
//! ```rust
//! use facility_layout::{solve, EvolutionOptions, LayoutProblem, RandomNumberGenerator};
//!
//! let problem = LayoutProblem::parse_str("4\n1,1,1,1\n1,1,1,1\n1,1,1,1\n1,1,1,1\n1,1,1,1\n").unwrap();
//! let options = EvolutionOptions::builder().num_generations(5).population_fraction(1.0).build().unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let best = solve(problem, &options, &mut rng).unwrap();
//! assert_eq!(best.score, 10.0);
//! ```
pub mod error;
pub mod evolution;
pub mod initialization;
pub mod operators;
pub mod ordering;
pub mod phenotype;
pub mod problem;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    EffortChallenge, EvolutionLauncher, EvolutionOptions, EvolutionResult, PreferenceIndexing,
};
pub use initialization::{IdenticalInitializer, Initializer, ShuffledInitializer};
pub use ordering::StationOrdering;
pub use problem::LayoutProblem;
pub use rng::RandomNumberGenerator;

use selection::TournamentSelection;
use strategy::GenerationalStrategy;

/// Runs the reference configuration on `problem`: positional preference
/// indexing, identical initial candidates and tournament-based generational
/// replacement sized from `options`.
pub fn solve(
    problem: LayoutProblem,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult<StationOrdering>> {
    let num_stations = problem.num_stations();
    let launcher: EvolutionLauncher<
        StationOrdering,
        GenerationalStrategy<TournamentSelection>,
        EffortChallenge,
        IdenticalInitializer,
    > = EvolutionLauncher::new(
        GenerationalStrategy::from_options(options)?,
        EffortChallenge::new(problem),
        IdenticalInitializer,
    );
    launcher.evolve(options, num_stations, rng)
}

pub mod builder;
pub mod challenge;
pub mod effort;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::Challenge;
pub use effort::{EffortChallenge, PreferenceIndexing};
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, LogLevel, PopulationSizing};

use crate::{
    error::{GeneticError, Result},
    initialization::Initializer,
    phenotype::Phenotype,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

pub struct EvolutionLauncherBuilder<P, B, F, I>
where
    P: Phenotype,
    B: BreedStrategy<P>,
    F: Challenge<P>,
    I: Initializer<P>,
{
    breed_strategy: Option<B>,
    challenge: Option<F>,
    initializer: Option<I>,
    _marker: std::marker::PhantomData<P>,
}

impl<P, B, F, I> EvolutionLauncherBuilder<P, B, F, I>
where
    P: Phenotype,
    B: BreedStrategy<P>,
    F: Challenge<P> + Sync,
    I: Initializer<P>,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
            initializer: None,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: F) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn with_initializer(mut self, initializer: I) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<P, B, F, I>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        let initializer = self
            .initializer
            .ok_or_else(|| GeneticError::Configuration("Initializer not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge, initializer))
    }
}

impl<P, B, F, I> Default for EvolutionLauncherBuilder<P, B, F, I>
where
    P: Phenotype,
    B: BreedStrategy<P>,
    F: Challenge<P> + Sync,
    I: Initializer<P>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::effort::EffortChallenge;
    use crate::initialization::IdenticalInitializer;
    use crate::ordering::StationOrdering;
    use crate::problem::LayoutProblem;
    use crate::selection::TournamentSelection;
    use crate::strategy::GenerationalStrategy;

    type Builder = EvolutionLauncherBuilder<
        StationOrdering,
        GenerationalStrategy<TournamentSelection>,
        EffortChallenge,
        IdenticalInitializer,
    >;

    fn challenge() -> EffortChallenge {
        EffortChallenge::new(LayoutProblem::new(vec![1.0; 3], vec![vec![1.0; 3]; 3]).unwrap())
    }

    #[test]
    fn test_build_complete() {
        let launcher = Builder::new()
            .with_breed_strategy(GenerationalStrategy::default())
            .with_challenge(challenge())
            .with_initializer(IdenticalInitializer)
            .build();

        assert!(launcher.is_ok());
    }

    #[test]
    fn test_build_missing_parts() {
        let missing_challenge = Builder::new()
            .with_breed_strategy(GenerationalStrategy::default())
            .with_initializer(IdenticalInitializer)
            .build();
        assert!(matches!(
            missing_challenge,
            Err(GeneticError::Configuration(msg)) if msg.contains("Challenge")
        ));

        let missing_strategy = Builder::default()
            .with_challenge(challenge())
            .with_initializer(IdenticalInitializer)
            .build();
        assert!(missing_strategy.is_err());

        let missing_initializer = Builder::default()
            .with_breed_strategy(GenerationalStrategy::default())
            .with_challenge(challenge())
            .build();
        assert!(missing_initializer.is_err());
    }
}

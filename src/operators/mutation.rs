//! # Swap mutation

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Exchanges the genes at two distinct, uniformly chosen positions.
///
/// A transposition of a permutation is a permutation, so validity is kept by
/// construction.
///
/// # Errors
///
/// Returns [`GeneticError::Breeding`] if `genes` has fewer than two elements.
pub fn swap_mutation(genes: &mut [usize], rng: &mut RandomNumberGenerator) -> Result<()> {
    if genes.len() < 2 {
        return Err(GeneticError::Breeding(
            "Swap mutation needs at least two genes".to_string(),
        ));
    }

    let picked = rng.sample_distinct(genes.len(), 2);
    genes.swap(picked[0], picked[1]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::is_permutation;
    use proptest::prelude::*;

    #[test]
    fn test_swap_mutation_rejects_short_input() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut genes = vec![0];
        assert!(swap_mutation(&mut genes, &mut rng).is_err());
        assert_eq!(genes, vec![0]);
    }

    #[test]
    fn test_two_genes_always_swap() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut genes = vec![0, 1];
        swap_mutation(&mut genes, &mut rng).unwrap();
        assert_eq!(genes, vec![1, 0]);
    }

    proptest! {
        #[test]
        fn mutation_is_a_transposition(
            genes in (2usize..50).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle()),
            seed in any::<u64>(),
        ) {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let mut mutated = genes.clone();
            swap_mutation(&mut mutated, &mut rng).unwrap();

            let changed: Vec<usize> = (0..genes.len())
                .filter(|&i| genes[i] != mutated[i])
                .collect();

            prop_assert_eq!(changed.len(), 2);
            let (i, j) = (changed[0], changed[1]);
            prop_assert_eq!(mutated[i], genes[j]);
            prop_assert_eq!(mutated[j], genes[i]);
            prop_assert!(is_permutation(&mutated));
        }
    }
}

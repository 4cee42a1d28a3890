//! # One-point order crossover
//!
//! A child keeps a prefix of one parent and fills the rest with the other
//! parent's genes, in the other parent's order, skipping anything already in
//! the prefix. Splicing tails positionally would duplicate genes; skipping them
//! keeps both children permutations of the same element set.

use std::collections::HashSet;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Picks a crossover point uniformly in `[1, L-1]` and builds both children.
///
/// # Errors
///
/// Returns [`GeneticError::Breeding`] if the parents differ in length or have
/// fewer than two genes.
pub fn one_point_order_crossover(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Result<(Vec<usize>, Vec<usize>)> {
    check_parents(parent1, parent2)?;
    let point = rng.gen_index(1, parent1.len());
    crossover_at(parent1, parent2, point)
}

/// Builds both children for a fixed crossover `point`.
///
/// ```rust
/// use facility_layout::operators::crossover_at;
///
/// let (a, b) = crossover_at(&[0, 1, 2, 3], &[3, 2, 1, 0], 2).unwrap();
/// assert_eq!(a, vec![0, 1, 3, 2]);
/// assert_eq!(b, vec![3, 2, 0, 1]);
/// ```
///
/// # Errors
///
/// Returns [`GeneticError::Breeding`] if the parents are incompatible or
/// `point` is not strictly between `0` and the parent length.
pub fn crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    point: usize,
) -> Result<(Vec<usize>, Vec<usize>)> {
    check_parents(parent1, parent2)?;
    if point == 0 || point >= parent1.len() {
        return Err(GeneticError::Breeding(format!(
            "Crossover point {} must lie in [1, {}]",
            point,
            parent1.len() - 1
        )));
    }

    Ok((
        build_child(parent1, parent2, point),
        build_child(parent2, parent1, point),
    ))
}

fn build_child(head: &[usize], donor: &[usize], point: usize) -> Vec<usize> {
    let prefix = &head[..point];
    let taken: HashSet<usize> = prefix.iter().copied().collect();

    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(prefix);
    child.extend(donor.iter().copied().filter(|gene| !taken.contains(gene)));
    child
}

fn check_parents(parent1: &[usize], parent2: &[usize]) -> Result<()> {
    if parent1.len() != parent2.len() {
        return Err(GeneticError::Breeding(format!(
            "Parents differ in length ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }
    if parent1.len() < 2 {
        return Err(GeneticError::Breeding(
            "Crossover needs at least two genes".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::is_permutation;
    use proptest::prelude::*;

    #[test]
    fn test_crossover_at_known_point() {
        let parent1 = [0, 1, 2, 3];
        let parent2 = [3, 2, 1, 0];

        let (child1, child2) = crossover_at(&parent1, &parent2, 2).unwrap();

        assert_eq!(child1, vec![0, 1, 3, 2]);
        assert_eq!(&child1[..2], &parent1[..2]);
        assert!(is_permutation(&child1));

        assert_eq!(child2, vec![3, 2, 0, 1]);
        assert!(is_permutation(&child2));
    }

    #[test]
    fn test_crossover_rejects_boundary_points() {
        let parent = [0, 1, 2];
        assert!(crossover_at(&parent, &parent, 0).is_err());
        assert!(crossover_at(&parent, &parent, 3).is_err());
        assert!(crossover_at(&parent, &parent, 1).is_ok());
        assert!(crossover_at(&parent, &parent, 2).is_ok());
    }

    #[test]
    fn test_crossover_rejects_mismatched_parents() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = one_point_order_crossover(&[0, 1, 2], &[0, 1], &mut rng);
        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }

    #[test]
    fn test_crossover_rejects_single_gene() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(one_point_order_crossover(&[0], &[0], &mut rng).is_err());
    }

    #[test]
    fn test_two_gene_crossover_swaps_tails() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let (a, b) = one_point_order_crossover(&[0, 1], &[1, 0], &mut rng).unwrap();
        assert_eq!(a, vec![0, 1]);
        assert_eq!(b, vec![1, 0]);
    }

    fn parent_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (2usize..40).prop_flat_map(|n| {
            let base: Vec<usize> = (0..n).collect();
            (
                Just(base.clone()).prop_shuffle(),
                Just(base).prop_shuffle(),
            )
        })
    }

    proptest! {
        #[test]
        fn children_are_permutations((p1, p2) in parent_pair(), seed in any::<u64>()) {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let (c1, c2) = one_point_order_crossover(&p1, &p2, &mut rng).unwrap();
            prop_assert!(is_permutation(&c1));
            prop_assert!(is_permutation(&c2));
            prop_assert_eq!(c1.len(), p1.len());
            prop_assert_eq!(c2.len(), p2.len());
        }

        #[test]
        fn child_keeps_parent_prefix((p1, p2) in parent_pair(), point_seed in any::<usize>()) {
            let point = 1 + point_seed % (p1.len() - 1);
            let (c1, c2) = crossover_at(&p1, &p2, point).unwrap();
            prop_assert_eq!(&c1[..point], &p1[..point]);
            prop_assert_eq!(&c2[..point], &p2[..point]);
        }
    }
}

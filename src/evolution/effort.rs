//! # EffortChallenge
//!
//! The layout objective. Stations sit next to each other along a line in the
//! order given by the candidate, and the effort of a layout is
//!
//! ```text
//! sum over positions i < j of distance(i, j) * w(i, j)
//! ```
//!
//! where `distance(i, j)` is the centre-to-centre gap between the stations at
//! positions `i` and `j`: half of each end station plus every station in
//! between. Which preference entry `w(i, j)` refers to is set by
//! [`PreferenceIndexing`].

use crate::error::{GeneticError, Result};
use crate::ordering::{is_permutation, StationOrdering};
use crate::problem::LayoutProblem;

use super::Challenge;

/// Which preference matrix entry weighs the pair at positions `i < j`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferenceIndexing {
    /// `preference[i][j]`: the matrix is read by position in the ordering,
    /// whatever stations occupy those positions. Reproduces the reference
    /// results.
    #[default]
    Positional,
    /// `preference[order[i]][order[j]]`: the matrix is read by the identity
    /// of the stations placed at `i` and `j`.
    Identity,
}

/// Centre-to-centre distance between the stations at positions `i < j` of
/// `order`.
///
/// ```rust
/// use facility_layout::evolution::effort::distance;
///
/// assert_eq!(distance(&[0, 1, 2], &[2.0, 2.0, 2.0], 0, 2), 4.0);
/// ```
///
/// # Panics
///
/// Panics unless `i < j < order.len()` and every station in `order` indexes
/// into `sizes`.
pub fn distance(order: &[usize], sizes: &[f64], i: usize, j: usize) -> f64 {
    assert!(i < j, "distance needs i < j, got i = {} and j = {}", i, j);
    let between: f64 = order[i + 1..j].iter().map(|&s| sizes[s]).sum();
    sizes[order[i]] / 2.0 + between + sizes[order[j]] / 2.0
}

#[derive(Debug, Clone)]
pub struct EffortChallenge {
    problem: LayoutProblem,
    indexing: PreferenceIndexing,
}

impl EffortChallenge {
    pub fn new(problem: LayoutProblem) -> Self {
        Self {
            problem,
            indexing: PreferenceIndexing::default(),
        }
    }

    pub fn with_indexing(mut self, indexing: PreferenceIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    pub fn problem(&self) -> &LayoutProblem {
        &self.problem
    }

    pub fn indexing(&self) -> PreferenceIndexing {
        self.indexing
    }

    /// Total effort of `order`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::FitnessCalculation`] if `order` is not a
    /// permutation of the problem's stations.
    pub fn effort(&self, order: &[usize]) -> Result<f64> {
        let n = self.problem.num_stations();
        if order.len() != n || !is_permutation(order) {
            return Err(GeneticError::FitnessCalculation(format!(
                "Ordering {:?} is not a permutation of {} stations",
                order, n
            )));
        }

        let sizes = self.problem.sizes();
        let preferences = self.problem.preferences();
        let mut total = 0.0;

        for i in 0..n.saturating_sub(1) {
            let half_left = sizes[order[i]] / 2.0;
            // Sum of the stations strictly between i and j, grown as j advances.
            let mut between = 0.0;
            for j in i + 1..n {
                let gap = half_left + between + sizes[order[j]] / 2.0;
                let weight = match self.indexing {
                    PreferenceIndexing::Positional => preferences[i][j],
                    PreferenceIndexing::Identity => preferences[order[i]][order[j]],
                };
                total += gap * weight;
                between += sizes[order[j]];
            }
        }

        Ok(total)
    }
}

impl Challenge<StationOrdering> for EffortChallenge {
    /// Invalid orderings score NaN, which the launcher rejects.
    fn score(&self, phenotype: &StationOrdering) -> f64 {
        self.effort(phenotype.stations()).unwrap_or(f64::NAN)
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.problem.num_stations())
    }
}

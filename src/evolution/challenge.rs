use crate::phenotype::Phenotype;

/// Scores candidates. Lower scores are better.
pub trait Challenge<Pheno: Phenotype> {
    fn score(&self, phenotype: &Pheno) -> f64;

    /// Gene count every candidate must have, when the challenge knows it.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

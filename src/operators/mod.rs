//! Permutation-preserving genetic operators.
//!
//! These work on plain `&[usize]` gene slices so they can be tested without a
//! problem instance. [`StationOrdering`](crate::ordering::StationOrdering)
//! routes its [`Phenotype`](crate::phenotype::Phenotype) methods here.
pub mod crossover;
pub mod mutation;

pub use crossover::{crossover_at, one_point_order_crossover};
pub use mutation::swap_mutation;

//! # Error Types
//!
//! This module defines the error type shared by the layout engine, the problem
//! file reader and the command-line front end. Every fallible operation in the
//! crate returns [`Result`], so configuration mistakes and malformed input are
//! reported before a single generation runs.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use facility_layout::error::{GeneticError, Result};
//!
//! fn check_stations(n: usize) -> Result<()> {
//!     if n < 2 {
//!         return Err(GeneticError::Configuration("need at least two stations".into()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_stations(1).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use facility_layout::error::{GeneticError, OptionExt};
//!
//! fn lowest_cost(costs: &[f64]) -> facility_layout::error::Result<f64> {
//!     costs
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest_cost(&[3.0, 1.5]).unwrap(), 1.5);
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or solving a layout problem.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A crossover or mutation operator was called with arguments that break
    /// its preconditions (mismatched parent lengths, too few genes).
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// The evolution loop could not produce a result.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Options, strategy parameters or problem dimensions are invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The problem file does not follow the expected layout.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The objective produced NaN or infinity.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for layout operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

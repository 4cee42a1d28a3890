//! # LayoutProblem
//!
//! Station sizes and the preference matrix of a single-row layout instance,
//! plus the reader for the plain-text problem file:
//!
//! ```text
//! 4
//! 1,2,1,3
//! 0,1,2,0
//! 1,0,1,1
//! 2,1,0,4
//! 0,1,4,0
//! ```
//!
//! The first line is the station count `N`, the second the `N` station sizes,
//! followed by `N` rows of `N` preference weights. All fields are integers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProblem {
    sizes: Vec<f64>,
    preferences: Vec<Vec<f64>>,
}

impl LayoutProblem {
    /// Builds a problem from sizes and a square preference matrix.
    ///
    /// Zero or negative values are accepted as given.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if there are fewer than two
    /// stations or the matrix is not `N x N`.
    pub fn new(sizes: Vec<f64>, preferences: Vec<Vec<f64>>) -> Result<Self> {
        let n = sizes.len();
        if n < 2 {
            return Err(GeneticError::Configuration(format!(
                "At least two stations are required, got {}",
                n
            )));
        }
        if preferences.len() != n {
            return Err(GeneticError::Configuration(format!(
                "Preference matrix has {} rows, expected {}",
                preferences.len(),
                n
            )));
        }
        if let Some((row, values)) = preferences.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GeneticError::Configuration(format!(
                "Preference row {} has {} columns, expected {}",
                row,
                values.len(),
                n
            )));
        }

        Ok(Self { sizes, preferences })
    }

    pub fn num_stations(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn preferences(&self) -> &[Vec<f64>] {
        &self.preferences
    }

    /// Reads a problem file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading layout problem");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn parse_str(input: &str) -> Result<Self> {
        Self::from_reader(input.as_bytes())
    }

    /// Parses the problem format from any buffered reader.
    ///
    /// Blank lines after the last matrix row are ignored; anything else that
    /// does not fit the format is a [`GeneticError::Parse`] naming the 1-based
    /// line it was found on.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        let header = lines.first().ok_or_else(|| GeneticError::Parse {
            line: 1,
            message: "missing station count".to_string(),
        })?;
        let n: usize = header.trim().parse().map_err(|e| GeneticError::Parse {
            line: 1,
            message: format!("invalid station count {:?}: {}", header.trim(), e),
        })?;

        let size_line = lines.get(1).ok_or_else(|| GeneticError::Parse {
            line: 2,
            message: "missing station sizes".to_string(),
        })?;
        let sizes = parse_row(size_line, 2, n)?;

        let rows = &lines[2..];
        if rows.len() != n {
            return Err(GeneticError::Parse {
                line: 3 + rows.len().min(n),
                message: format!("expected {} preference rows, found {}", n, rows.len()),
            });
        }
        let preferences = rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_row(row, i + 3, n))
            .collect::<Result<Vec<_>>>()?;

        Self::new(sizes, preferences)
    }
}

fn parse_row(raw: &str, line: usize, expected: usize) -> Result<Vec<f64>> {
    let values = raw
        .split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<i64>()
                .map(|v| v as f64)
                .map_err(|e| GeneticError::Parse {
                    line,
                    message: format!("invalid integer {:?}: {}", field, e),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() != expected {
        return Err(GeneticError::Parse {
            line,
            message: format!("expected {} values, found {}", expected, values.len()),
        });
    }
    Ok(values)
}

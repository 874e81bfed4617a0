//! Pairwise distances between the entities of a measurement table.
//!
//! Two interchangeable flavors, both producing a symmetric
//! [`DistanceMatrix`] with a forced zero diagonal:
//!
//! - [`DistanceKind::Fpd`]: discrete Bhattacharyya distance between the
//!   entities' frequency point distributions, zero-padded to a common
//!   support length.
//! - [`DistanceKind::GaussianBinned`]: closed-form Gaussian Bhattacharyya
//!   distance between the entities' binned intensity summaries.
//!
//! # Example
//!
//! ```
//! use trafficsense::core::MeasurementTable;
//! use trafficsense::distance::{distance_matrix, DistanceKind};
//!
//! let table = MeasurementTable::new(
//!     vec!["K124".to_string(), "K159".to_string()],
//!     vec![vec![1.0, 1.0, 2.0], vec![1.0, 2.0, 2.0]],
//! )
//! .unwrap();
//!
//! let matrix = distance_matrix(&table, DistanceKind::Fpd).unwrap();
//! assert_eq!(matrix.len(), 2);
//! assert_eq!(matrix.value(0, 0), 0.0);
//! assert_eq!(matrix.value(0, 1), matrix.value(1, 0));
//! ```

mod bhattacharyya;
mod matrix;

pub use bhattacharyya::{bhattacharyya_distance, gaussian_bhattacharyya_distance};
pub use matrix::DistanceMatrix;

use crate::core::MeasurementTable;
use crate::distribution::{FrequencyPointDistribution, Histogram};
use crate::error::Result;

/// Which pairwise distance to compute over a table's entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceKind {
    /// Discrete Bhattacharyya distance over frequency point distributions.
    Fpd,
    /// Gaussian-parametric Bhattacharyya distance over binned intensity
    /// summaries with the given number of equal-width bins.
    GaussianBinned { bins: usize },
}

/// Compute the pairwise distance matrix over a table's entities.
///
/// Entity order in the matrix is the table's column order. A table without
/// columns yields an empty matrix.
pub fn distance_matrix(table: &MeasurementTable, kind: DistanceKind) -> Result<DistanceMatrix> {
    let labels = table.labels().to_vec();
    match kind {
        DistanceKind::Fpd => {
            let distributions: Vec<FrequencyPointDistribution> = table
                .columns()
                .iter()
                .map(|column| FrequencyPointDistribution::from_series(column))
                .collect();
            let support = distributions.iter().map(|d| d.len()).max().unwrap_or(0);
            let vectors: Vec<Vec<f64>> = distributions
                .iter()
                .map(|d| d.zero_padded(support))
                .collect();
            Ok(DistanceMatrix::from_pairwise(labels, |i, j| {
                bhattacharyya_distance(&vectors[i], &vectors[j])
            }))
        }
        DistanceKind::GaussianBinned { bins } => {
            let summaries = table
                .columns()
                .iter()
                .map(|column| Histogram::new(column, bins).map(|h| h.gaussian_summary()))
                .collect::<Result<Vec<_>>>()?;
            Ok(DistanceMatrix::from_pairwise(labels, |i, j| {
                gaussian_bhattacharyya_distance(
                    summaries[i].mean,
                    summaries[i].variance,
                    summaries[j].mean,
                    summaries[j].variance,
                )
            }))
        }
    }
}

//! Local Outlier Factor over an arbitrary distance matrix.
//!
//! LOF compares an entity's local density with the local densities of its
//! k nearest neighbors. Scores near 1 mean the entity sits in a
//! neighborhood of similar density; scores well above 1 mean it is sparser
//! than its neighbors and behaves anomalously relative to them.
//!
//! The algorithm makes no structural metric assumption: any symmetric
//! non-negative dissimilarity works, which is what lets it run on
//! Bhattacharyya distances between frequency point distributions.

use crate::core::MeasurementTable;
use crate::distance::{distance_matrix, DistanceKind, DistanceMatrix};
use crate::error::Result;
use crate::outlier::knn::k_nearest;
use std::collections::HashMap;

/// Compute the Local Outlier Factor of every entity in a distance matrix.
///
/// Per entity: the k-distance is the distance to the farthest of its k
/// nearest neighbors; the reachability distance to a neighbor is the larger
/// of that neighbor's k-distance and the direct distance; the local
/// reachability density is k over the summed reachability distances; the
/// LOF is the mean neighbor density divided by the entity's own density.
///
/// An entity coinciding with all of its neighbors has a zero reachability
/// sum; its density saturates at `f64::MAX` and its LOF is 1.0, since a
/// member of a cluster of duplicates is not an outlier. The opposite case,
/// an entity infinitely far from its neighbors, has zero density: its LOF
/// is infinite against finite-density neighbors and 1.0 when every peer is
/// equally unreachable.
///
/// Requires `1 <= k < number of entities`.
pub fn lof_scores(matrix: &DistanceMatrix, k: usize) -> Result<HashMap<String, f64>> {
    let knn = k_nearest(matrix, k)?;
    let n = matrix.len();
    let neighbors = knn.neighbors();

    // k-distance: the last entry of the ascending neighbor list
    let k_distances: Vec<f64> = (0..n)
        .map(|i| matrix.value(i, neighbors[i][k - 1]))
        .collect();

    let densities: Vec<f64> = (0..n)
        .map(|i| {
            let reach_sum: f64 = neighbors[i]
                .iter()
                .map(|&o| k_distances[o].max(matrix.value(i, o)))
                .sum();
            if reach_sum > 0.0 {
                k as f64 / reach_sum
            } else {
                f64::MAX
            }
        })
        .collect();

    let scores = matrix
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let score = if densities[i] >= f64::MAX {
                1.0
            } else {
                let neighbor_mean =
                    neighbors[i].iter().map(|&o| densities[o]).sum::<f64>() / k as f64;
                if densities[i] > 0.0 {
                    neighbor_mean / densities[i]
                } else if neighbor_mean > 0.0 {
                    // Infinitely far from finite-density neighbors
                    f64::INFINITY
                } else {
                    // Every entity is infinitely far from every other:
                    // nobody is sparser than its peers
                    1.0
                }
            };
            (label.clone(), score)
        })
        .collect();

    Ok(scores)
}

/// Score every entity of a measurement table by LOF over the discrete
/// Bhattacharyya distances of its frequency point distributions.
///
/// This is the end-to-end outlier pipeline: estimate one distribution per
/// column, build the pairwise distance matrix, select k nearest peers and
/// derive the density-ratio score per entity.
///
/// # Example
/// ```
/// use trafficsense::core::MeasurementTable;
/// use trafficsense::outlier::fpd_lof;
///
/// let table = MeasurementTable::new(
///     vec!["K124".to_string(), "K159".to_string(), "K406".to_string(), "K711".to_string()],
///     vec![
///         vec![1.0, 1.0, 2.0],
///         vec![1.0, 1.0, 2.0],
///         vec![1.0, 1.0, 2.0],
///         vec![7.0, 8.0, 9.0],
///     ],
/// )
/// .unwrap();
///
/// let scores = fpd_lof(&table, 2).unwrap();
/// assert!((scores["K124"] - 1.0).abs() < 1e-10);
/// assert!(scores["K711"] > 10.0);
/// ```
pub fn fpd_lof(table: &MeasurementTable, k: usize) -> Result<HashMap<String, f64>> {
    let matrix = distance_matrix(table, DistanceKind::Fpd)?;
    lof_scores(&matrix, k)
}

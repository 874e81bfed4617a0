//! k-nearest-neighbor selection over a distance matrix.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TrafficError};
use std::collections::HashMap;

/// Each entity's k closest peers, ascending by distance.
///
/// The entity itself is excluded from its own list: the forced-zero matrix
/// diagonal would otherwise make every entity its own trivial nearest
/// neighbor and waste one of the k slots. Ties are broken by ascending
/// column index, so the selection is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct KNearestTable {
    labels: Vec<String>,
    neighbors: Vec<Vec<usize>>,
    k: usize,
}

impl KNearestTable {
    /// Get the number of neighbors per entity.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Get the entity labels, in matrix order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the neighbor index lists, one per entity in matrix order.
    pub fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    /// Get one entity's neighbor indices by label.
    pub fn neighbors_of(&self, label: &str) -> Option<&[usize]> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.neighbors[i].as_slice())
    }

    /// Render the table as a label-to-labels mapping.
    pub fn to_label_map(&self) -> HashMap<String, Vec<String>> {
        self.labels
            .iter()
            .zip(&self.neighbors)
            .map(|(label, neighbors)| {
                let named = neighbors.iter().map(|&j| self.labels[j].clone()).collect();
                (label.clone(), named)
            })
            .collect()
    }
}

/// Select each entity's k nearest other entities from a distance matrix.
///
/// Requires a non-empty matrix and `1 <= k < number of entities`.
pub fn k_nearest(matrix: &DistanceMatrix, k: usize) -> Result<KNearestTable> {
    let n = matrix.len();
    if n == 0 {
        return Err(TrafficError::EmptyData);
    }
    if k == 0 || k >= n {
        return Err(TrafficError::InvalidParameter(format!(
            "k must satisfy 1 <= k < {}, got {}",
            n, k
        )));
    }

    let neighbors = (0..n)
        .map(|i| {
            let mut candidates: Vec<(f64, usize)> = (0..n)
                .filter(|&j| j != i)
                .map(|j| (matrix.value(i, j), j))
                .collect();
            candidates.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.1.cmp(&b.1))
            });
            candidates.truncate(k);
            candidates.into_iter().map(|(_, j)| j).collect()
        })
        .collect();

    Ok(KNearestTable {
        labels: matrix.labels().to_vec(),
        neighbors,
        k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> DistanceMatrix {
        // Entities on a line at positions 0, 1, 3, 7
        let positions: [f64; 4] = [0.0, 1.0, 3.0, 7.0];
        DistanceMatrix::from_pairwise(
            vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
            move |i, j| (positions[i] - positions[j]).abs(),
        )
    }

    #[test]
    fn nearest_neighbors_ascend_by_distance() {
        let table = k_nearest(&line_matrix(), 2).unwrap();

        assert_eq!(table.k(), 2);
        assert_eq!(table.neighbors_of("a"), Some([1, 2].as_slice()));
        assert_eq!(table.neighbors_of("b"), Some([0, 2].as_slice()));
        assert_eq!(table.neighbors_of("c"), Some([1, 0].as_slice()));
        assert_eq!(table.neighbors_of("d"), Some([2, 1].as_slice()));
    }

    #[test]
    fn self_is_never_a_neighbor() {
        let table = k_nearest(&line_matrix(), 3).unwrap();
        for (i, neighbors) in table.neighbors().iter().enumerate() {
            assert!(!neighbors.contains(&i));
            assert_eq!(neighbors.len(), 3);
        }
    }

    #[test]
    fn ties_break_by_column_index() {
        let matrix = DistanceMatrix::from_pairwise(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            |_, _| 1.0,
        );
        let table = k_nearest(&matrix, 2).unwrap();

        assert_eq!(table.neighbors_of("a"), Some([1, 2].as_slice()));
        assert_eq!(table.neighbors_of("b"), Some([0, 2].as_slice()));
        assert_eq!(table.neighbors_of("c"), Some([0, 1].as_slice()));
    }

    #[test]
    fn infinite_distances_sort_last() {
        let matrix = DistanceMatrix::from_pairwise(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            |i, j| {
                if i == 0 && j == 1 {
                    f64::INFINITY
                } else {
                    1.0
                }
            },
        );
        let table = k_nearest(&matrix, 1).unwrap();
        assert_eq!(table.neighbors_of("a"), Some([2].as_slice()));
    }

    #[test]
    fn k_out_of_range_is_rejected() {
        let matrix = line_matrix();
        assert!(matches!(
            k_nearest(&matrix, 0),
            Err(TrafficError::InvalidParameter(_))
        ));
        assert!(matches!(
            k_nearest(&matrix, 4),
            Err(TrafficError::InvalidParameter(_))
        ));
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let matrix = DistanceMatrix::from_pairwise(vec![], |_, _| 0.0);
        assert!(matches!(k_nearest(&matrix, 1), Err(TrafficError::EmptyData)));
    }

    #[test]
    fn label_map_carries_entity_names() {
        let table = k_nearest(&line_matrix(), 1).unwrap();
        let map = table.to_label_map();
        assert_eq!(map["a"], vec!["b".to_string()]);
        assert_eq!(map["d"], vec!["c".to_string()]);
    }
}

//! Labelled symmetric distance matrices over table entities.

/// A square, symmetric, non-negative distance matrix keyed by entity label.
///
/// The diagonal is 0 by definition: an entity's distance to itself is zero
/// regardless of what the raw pairwise formula would produce, and the
/// self-pair stays part of the matrix's bookkeeping. Row and column order
/// is the column order of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build a matrix by evaluating `distance` over the upper triangle and
    /// mirroring it; the diagonal is forced to 0.
    pub fn from_pairwise<F>(labels: Vec<String>, distance: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let n = labels.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(i, j);
                values[i][j] = d;
                values[j][i] = d;
            }
        }
        Self { labels, values }
    }

    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the entity labels, in row/column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the raw rows.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Get the distance between entities `i` and `j`.
    ///
    /// Panics if either index is out of bounds, like slice indexing.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Get the distance between two labelled entities, if both exist.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.values[i][j])
    }
}

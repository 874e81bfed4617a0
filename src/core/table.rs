//! Measurement table: labelled numeric columns over fixed-width time steps.

use crate::error::{Result, TrafficError};

/// Number of 15-minute samples in one week (7 days x 24 hours x 4 samples).
pub const SAMPLES_PER_WEEK: usize = 672;

/// Length of one sampling step in minutes.
pub const SAMPLE_MINUTES: i64 = 15;

/// A table of per-entity measurement series.
///
/// Columns are stored column-major and share one row count; each row is one
/// 15-minute step. Row order is the sole temporal ordering; timestamps live
/// in a separate [`CalendarAxis`](super::CalendarAxis). Missing observations
/// are `f64::NAN`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl MeasurementTable {
    /// Create a table from labelled columns.
    ///
    /// All columns must have the same length, and there must be one label
    /// per column.
    pub fn new(labels: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        if labels.len() != columns.len() {
            return Err(TrafficError::DimensionMismatch {
                expected: columns.len(),
                got: labels.len(),
            });
        }
        if let Some(first) = columns.first() {
            let rows = first.len();
            for column in &columns {
                if column.len() != rows {
                    return Err(TrafficError::DimensionMismatch {
                        expected: rows,
                        got: column.len(),
                    });
                }
            }
        }
        Ok(Self { labels, columns })
    }

    /// Create a single-column table.
    pub fn single(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            labels: vec![label.into()],
            columns: vec![values],
        }
    }

    /// Get the number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Get the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0 || self.columns.is_empty()
    }

    /// Get the column labels, in column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get a column by index.
    pub fn column(&self, index: usize) -> Result<&[f64]> {
        self.columns
            .get(index)
            .map(|c| c.as_slice())
            .ok_or(TrafficError::IndexOutOfBounds {
                index,
                size: self.columns.len(),
            })
    }

    /// Get a column by label.
    pub fn column_by_label(&self, label: &str) -> Option<&[f64]> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.columns[i].as_slice())
    }

    /// Get all columns in column order.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Get a row (one value per column).
    pub fn row(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.n_rows() {
            return Err(TrafficError::IndexOutOfBounds {
                index,
                size: self.n_rows(),
            });
        }
        Ok(self.columns.iter().map(|c| c[index]).collect())
    }

    /// Keep the rows where `mask` is true.
    ///
    /// The mask must have one entry per row.
    pub fn select_rows(&self, mask: &[bool]) -> Result<MeasurementTable> {
        if mask.len() != self.n_rows() {
            return Err(TrafficError::DimensionMismatch {
                expected: self.n_rows(),
                got: mask.len(),
            });
        }
        let columns = self
            .columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .zip(mask)
                    .filter(|(_, &keep)| keep)
                    .map(|(&v, _)| v)
                    .collect()
            })
            .collect();
        Ok(MeasurementTable {
            labels: self.labels.clone(),
            columns,
        })
    }

    /// Build a new table from the given row indices, in order.
    ///
    /// Indices may repeat, which is how a canonical week is tiled over
    /// multi-week spans.
    pub fn take_rows(&self, indices: &[usize]) -> Result<MeasurementTable> {
        let rows = self.n_rows();
        if let Some(&bad) = indices.iter().find(|&&i| i >= rows) {
            return Err(TrafficError::IndexOutOfBounds {
                index: bad,
                size: rows,
            });
        }
        let columns = self
            .columns
            .iter()
            .map(|column| indices.iter().map(|&i| column[i]).collect())
            .collect();
        Ok(MeasurementTable {
            labels: self.labels.clone(),
            columns,
        })
    }

    /// Drop the first `n` rows.
    pub fn skip_rows(&self, n: usize) -> MeasurementTable {
        let columns = self
            .columns
            .iter()
            .map(|column| column[n.min(column.len())..].to_vec())
            .collect();
        MeasurementTable {
            labels: self.labels.clone(),
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_table() -> MeasurementTable {
        MeasurementTable::new(
            vec!["north".to_string(), "south".to_string()],
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        )
        .unwrap()
    }

    #[test]
    fn table_constructs_and_exposes_columns() {
        let table = two_column_table();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_columns(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.labels(), &["north", "south"]);
        assert_eq!(table.column(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.column_by_label("south"), Some([4.0, 5.0, 6.0].as_slice()));
        assert_eq!(table.row(1).unwrap(), vec![2.0, 5.0]);
    }

    #[test]
    fn table_rejects_ragged_columns() {
        let result = MeasurementTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 2.0], vec![3.0]],
        );
        assert!(matches!(
            result,
            Err(TrafficError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn table_rejects_label_count_mismatch() {
        let result = MeasurementTable::new(vec!["a".to_string()], vec![vec![1.0], vec![2.0]]);
        assert!(matches!(
            result,
            Err(TrafficError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn select_rows_applies_mask() {
        let table = two_column_table();
        let selected = table.select_rows(&[true, false, true]).unwrap();

        assert_eq!(selected.n_rows(), 2);
        assert_eq!(selected.column(0).unwrap(), &[1.0, 3.0]);
        assert_eq!(selected.column(1).unwrap(), &[4.0, 6.0]);
    }

    #[test]
    fn select_rows_rejects_wrong_mask_length() {
        let table = two_column_table();
        assert!(table.select_rows(&[true, false]).is_err());
    }

    #[test]
    fn take_rows_repeats_and_reorders() {
        let table = two_column_table();
        let taken = table.take_rows(&[2, 0, 0]).unwrap();

        assert_eq!(taken.column(0).unwrap(), &[3.0, 1.0, 1.0]);
        assert_eq!(taken.column(1).unwrap(), &[6.0, 4.0, 4.0]);
    }

    #[test]
    fn take_rows_rejects_out_of_bounds() {
        let table = two_column_table();
        assert!(matches!(
            table.take_rows(&[0, 3]),
            Err(TrafficError::IndexOutOfBounds { index: 3, size: 3 })
        ));
    }

    #[test]
    fn skip_rows_drops_leading_rows() {
        let table = two_column_table();
        let skipped = table.skip_rows(1);
        assert_eq!(skipped.column(0).unwrap(), &[2.0, 3.0]);

        // Skipping more rows than exist leaves an empty table
        let skipped = table.skip_rows(10);
        assert_eq!(skipped.n_rows(), 0);
        assert!(skipped.is_empty());
    }

    #[test]
    fn empty_table_reports_zero_rows() {
        let table = MeasurementTable::new(vec![], vec![]).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert!(table.is_empty());
        assert!(table.column(0).is_err());
    }

    #[test]
    fn week_constant_matches_sampling() {
        assert_eq!(SAMPLES_PER_WEEK, 7 * 24 * 60 / SAMPLE_MINUTES as usize);
    }
}

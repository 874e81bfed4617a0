//! Per-entity summaries of a window-trimmed measurement table.
//!
//! Shapes a trimmed table for presentation: either one summed series per
//! entity or the individual signal columns, together with the maximum
//! observed value. The maximum is part of the returned value: each call
//! computes its own, so concurrent requests never share an accumulator.

use crate::core::MeasurementTable;
use crate::error::Result;

/// How to shape a trimmed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// One series: the row-wise sum across all signal columns.
    Summed,
    /// The individual signal columns, unchanged.
    PerSignal,
}

/// The shaped series of a summary.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValues {
    /// Row-wise sums across the signal columns.
    Summed(Vec<f64>),
    /// The signal columns as given.
    PerSignal(MeasurementTable),
}

/// A shaped table plus the maximum value observed while shaping it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSummary {
    pub values: SummaryValues,
    pub max_value: f64,
}

/// Row-wise sum across all columns, skipping missing values.
///
/// A row with only missing values sums to 0.
pub fn sum_rows(table: &MeasurementTable) -> Vec<f64> {
    (0..table.n_rows())
        .map(|row| {
            table
                .columns()
                .iter()
                .map(|column| column[row])
                .filter(|v| v.is_finite())
                .sum()
        })
        .collect()
}

/// Shape a trimmed table for presentation.
///
/// The returned maximum is over the shaped values (the summed series in
/// [`SummaryMode::Summed`], every cell in [`SummaryMode::PerSignal`]),
/// ignoring missing values; a table with no finite values reports 0.
pub fn summarize(table: &MeasurementTable, mode: SummaryMode) -> TrafficSummary {
    match mode {
        SummaryMode::Summed => {
            let summed = sum_rows(table);
            let max_value = finite_max(summed.iter().copied());
            TrafficSummary {
                values: SummaryValues::Summed(summed),
                max_value,
            }
        }
        SummaryMode::PerSignal => {
            let max_value = finite_max(table.columns().iter().flatten().copied());
            TrafficSummary {
                values: SummaryValues::PerSignal(table.clone()),
                max_value,
            }
        }
    }
}

/// Deviation totals for one entity over a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationCounts {
    /// Number of deviant steps.
    pub deviant: f64,
    /// Number of steps above the expected band.
    pub above: f64,
    /// Number of steps below the expected band.
    pub below: f64,
    /// Total flow over the window, missing values counted as 0.
    pub total_flow: f64,
}

/// Total the deviation indicator tables of one entity.
///
/// The deviant/above/below tables carry their indicator in the first
/// column; the aggregated table is summed over every cell.
pub fn deviation_counts(
    deviant: &MeasurementTable,
    above: &MeasurementTable,
    below: &MeasurementTable,
    aggregated: &MeasurementTable,
) -> Result<DeviationCounts> {
    let total_flow = aggregated
        .columns()
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .sum();
    Ok(DeviationCounts {
        deviant: finite_sum(deviant.column(0)?),
        above: finite_sum(above.column(0)?),
        below: finite_sum(below.column(0)?),
        total_flow,
    })
}

fn finite_sum(values: &[f64]) -> f64 {
    values.iter().filter(|v| v.is_finite()).sum()
}

fn finite_max<I: Iterator<Item = f64>>(values: I) -> f64 {
    values
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.0)
}

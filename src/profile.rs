//! Canonical week profiles derived from a full measurement log.
//!
//! A full log is cut to whole weeks and folded into a weeks x 672 grid per
//! column; the per-slot mean and standard deviation across weeks give a
//! representative week that window mappers can tile over arbitrary spans.

use crate::core::{MeasurementTable, SAMPLES_PER_WEEK};
use crate::error::{Result, TrafficError};

/// Per-slot mean and standard deviation over the weeks of a full log.
///
/// Both tables have exactly [`SAMPLES_PER_WEEK`] rows and carry the source
/// table's column labels.
#[derive(Debug, Clone)]
pub struct WeeklyProfile {
    mean: MeasurementTable,
    std: MeasurementTable,
}

impl WeeklyProfile {
    /// Get the per-slot mean table (672 rows).
    pub fn mean(&self) -> &MeasurementTable {
        &self.mean
    }

    /// Get the per-slot standard deviation table (672 rows).
    pub fn std(&self) -> &MeasurementTable {
        &self.std
    }
}

/// Fold a full log into its weekly mean/std profile.
///
/// The leading `len % 672` rows are dropped so the log covers whole weeks;
/// at least one whole week must remain. Missing values are ignored per slot,
/// and a slot that is missing in every week stays `NAN` in both outputs.
/// The standard deviation is the population deviation over the week
/// instances of each slot.
pub fn weekly_profile(table: &MeasurementTable) -> Result<WeeklyProfile> {
    let cutoff = table.n_rows() % SAMPLES_PER_WEEK;
    let trimmed = table.skip_rows(cutoff);
    let weeks = trimmed.n_rows() / SAMPLES_PER_WEEK;
    if weeks == 0 {
        return Err(TrafficError::InsufficientData {
            needed: SAMPLES_PER_WEEK,
            got: table.n_rows(),
        });
    }

    let mut mean_columns = Vec::with_capacity(trimmed.n_columns());
    let mut std_columns = Vec::with_capacity(trimmed.n_columns());

    for column in trimmed.columns() {
        let mut means = Vec::with_capacity(SAMPLES_PER_WEEK);
        let mut stds = Vec::with_capacity(SAMPLES_PER_WEEK);

        for slot in 0..SAMPLES_PER_WEEK {
            let mut sum = 0.0;
            let mut count = 0usize;
            for week in 0..weeks {
                let v = column[week * SAMPLES_PER_WEEK + slot];
                if v.is_finite() {
                    sum += v;
                    count += 1;
                }
            }
            if count == 0 {
                means.push(f64::NAN);
                stds.push(f64::NAN);
                continue;
            }
            let mean = sum / count as f64;
            let mut sum_sq = 0.0;
            for week in 0..weeks {
                let v = column[week * SAMPLES_PER_WEEK + slot];
                if v.is_finite() {
                    sum_sq += (v - mean).powi(2);
                }
            }
            means.push(mean);
            stds.push((sum_sq / count as f64).sqrt());
        }

        mean_columns.push(means);
        std_columns.push(stds);
    }

    let labels = trimmed.labels().to_vec();
    Ok(WeeklyProfile {
        mean: MeasurementTable::new(labels.clone(), mean_columns)?,
        std: MeasurementTable::new(labels, std_columns)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_week_table(first: f64, second: f64) -> MeasurementTable {
        let mut values = vec![first; SAMPLES_PER_WEEK];
        values.extend(vec![second; SAMPLES_PER_WEEK]);
        MeasurementTable::single("K124", values)
    }

    #[test]
    fn profile_averages_across_weeks() {
        let table = two_week_table(1.0, 3.0);
        let profile = weekly_profile(&table).unwrap();

        assert_eq!(profile.mean().n_rows(), SAMPLES_PER_WEEK);
        assert_eq!(profile.std().n_rows(), SAMPLES_PER_WEEK);
        assert_eq!(profile.mean().labels(), &["K124"]);

        let mean = profile.mean().column(0).unwrap();
        let std = profile.std().column(0).unwrap();
        for slot in 0..SAMPLES_PER_WEEK {
            assert_relative_eq!(mean[slot], 2.0, epsilon = 1e-10);
            assert_relative_eq!(std[slot], 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn profile_drops_leading_partial_week() {
        // 56 leading rows that would skew slot 0 if kept
        let mut values = vec![100.0; 56];
        values.extend(vec![1.0; SAMPLES_PER_WEEK]);
        values.extend(vec![3.0; SAMPLES_PER_WEEK]);
        let table = MeasurementTable::single("K124", values);

        let profile = weekly_profile(&table).unwrap();
        let mean = profile.mean().column(0).unwrap();
        assert_relative_eq!(mean[0], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn profile_ignores_missing_values() {
        let mut values = vec![2.0; SAMPLES_PER_WEEK];
        values.extend(vec![4.0; SAMPLES_PER_WEEK]);
        // Slot 10 of the second week is missing: mean falls back to the
        // first week's value, deviation collapses to 0.
        values[SAMPLES_PER_WEEK + 10] = f64::NAN;
        let table = MeasurementTable::single("K124", values);

        let profile = weekly_profile(&table).unwrap();
        let mean = profile.mean().column(0).unwrap();
        let std = profile.std().column(0).unwrap();
        assert_relative_eq!(mean[10], 2.0, epsilon = 1e-10);
        assert_relative_eq!(std[10], 0.0, epsilon = 1e-10);
        assert_relative_eq!(mean[11], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn profile_keeps_all_missing_slot_as_nan() {
        let mut values = vec![1.0; 2 * SAMPLES_PER_WEEK];
        values[5] = f64::NAN;
        values[SAMPLES_PER_WEEK + 5] = f64::NAN;
        let table = MeasurementTable::single("K124", values);

        let profile = weekly_profile(&table).unwrap();
        assert!(profile.mean().column(0).unwrap()[5].is_nan());
        assert!(profile.std().column(0).unwrap()[5].is_nan());
    }

    #[test]
    fn profile_requires_one_whole_week() {
        let table = MeasurementTable::single("K124", vec![1.0; SAMPLES_PER_WEEK - 1]);
        assert!(matches!(
            weekly_profile(&table),
            Err(TrafficError::InsufficientData { .. })
        ));
    }
}

//! Equal-width histograms over a value series.

use crate::error::{Result, TrafficError};

/// Mean and population variance of a binned series, read off its histogram.
///
/// Summarizes which intensity levels an entity's observations fall into;
/// consumed by the Gaussian-parametric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianSummary {
    pub mean: f64,
    pub variance: f64,
}

/// Observation counts over `bins` equal-width intervals spanning
/// `[min, max]` of the non-missing values.
///
/// The range is closed at both ends: the maximum value lands in the last
/// bin, so no observation is dropped except true missing values (non-finite
/// entries). A constant series places every observation in bin 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<usize>,
    range: Option<(f64, f64)>,
    observations: usize,
}

impl Histogram {
    /// Bin a value series.
    ///
    /// `bins` must be at least 1. A series with no finite values yields
    /// all-zero counts.
    pub fn new(series: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(TrafficError::InvalidParameter(
                "bins must be at least 1".to_string(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in series {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            return Ok(Self {
                counts: vec![0; bins],
                range: None,
                observations: 0,
            });
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        let mut observations = 0usize;
        for &v in series {
            if !v.is_finite() {
                continue;
            }
            let bin = if width > 0.0 {
                (((v - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[bin] += 1;
            observations += 1;
        }

        Ok(Self {
            counts,
            range: Some((min, max)),
            observations,
        })
    }

    /// Get the per-bin observation counts.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Get the number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Get the number of binned (non-missing) observations.
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Get the `[min, max]` value range, or `None` if nothing was observed.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Summarize the bin ids of the observations as mean and population
    /// variance.
    ///
    /// An empty histogram summarizes to `(0, 0)`, which downstream distance
    /// code resolves through its zero-variance fallback.
    pub fn gaussian_summary(&self) -> GaussianSummary {
        if self.observations == 0 {
            return GaussianSummary {
                mean: 0.0,
                variance: 0.0,
            };
        }
        let n = self.observations as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for (bin, &count) in self.counts.iter().enumerate() {
            let id = bin as f64;
            sum += id * count as f64;
            sum_sq += id * id * count as f64;
        }
        let mean = sum / n;
        GaussianSummary {
            mean,
            variance: (sum_sq / n - mean * mean).max(0.0),
        }
    }
}

//! Calendar axis: the timestamp sequence aligned with a full measurement log.

use crate::core::table::SAMPLE_MINUTES;
use crate::error::{Result, TrafficError};
use chrono::{DateTime, Duration, Utc};

/// A strictly increasing sequence of timestamps, one per row of the full
/// measurement log.
///
/// The axis is read-only once constructed; window mappers read it to
/// translate calendar bounds into row indices and never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarAxis {
    timestamps: Vec<DateTime<Utc>>,
}

impl CalendarAxis {
    /// Create an axis from a timestamp sequence.
    pub fn new(timestamps: Vec<DateTime<Utc>>) -> Result<Self> {
        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(TrafficError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }
        Ok(Self { timestamps })
    }

    /// Create a regular 15-minute axis starting at `start`.
    pub fn quarter_hourly(start: DateTime<Utc>, rows: usize) -> Self {
        let timestamps = (0..rows)
            .map(|i| start + Duration::minutes(SAMPLE_MINUTES * i as i64))
            .collect();
        Self { timestamps }
    }

    /// Get the number of timestamps.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the axis is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get a timestamp by row index.
    pub fn get(&self, index: usize) -> Option<DateTime<Utc>> {
        self.timestamps.get(index).copied()
    }

    /// Drop the first `n` timestamps.
    pub fn skip(&self, n: usize) -> CalendarAxis {
        CalendarAxis {
            timestamps: self.timestamps[n.min(self.timestamps.len())..].to_vec(),
        }
    }
}
